//! Spell checking errors.
use std::io::Error;
use std::path::PathBuf;

/// Errors that can occur while building a dictionary or resolving a subject.
///
/// Every variant is fatal to the operation that produced it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpellcheckError {
    /// The word list could not be opened or read
    #[error("Dictionary source '{}' is unavailable", .path.display())]
    DictionarySourceUnavailable {
        /// path of the word list
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: Error,
    },

    /// The subject names a file that could not be read
    #[error("Subject file '{}' is unavailable", .path.display())]
    SubjectUnavailable {
        /// path of the subject file
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: Error,
    },

    /// The caller supplied no usable subject
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An empty line was found in the word list while empty lines are rejected
    #[error("Empty dictionary entry on line {line}")]
    EmptyDictionaryEntry {
        /// 1-based line number
        line: usize,
    },

    /// The configuration file could not be read or parsed
    #[error("Failed to load config '{}'", .path.display())]
    Config {
        /// path of the configuration file
        path: PathBuf,
        /// underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
