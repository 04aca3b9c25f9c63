//! Configuration for building dictionaries and checking text.
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpellcheckError;
use crate::vfs::Filesystem;

/// Comparator used to order and equate dictionary words.
///
/// The same collation is used when the dictionary is built and when it is
/// queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Collation {
    /// Byte-wise lexicographic order, case-sensitive
    #[default]
    Bytewise,
    /// Byte-wise order with ASCII letters folded to lower case
    AsciiCaseInsensitive,
}

impl Collation {
    /// Compares two words under this collation.
    #[inline]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Bytewise => a.as_bytes().cmp(b.as_bytes()),
            Collation::AsciiCaseInsensitive => a
                .bytes()
                .map(|x| x.to_ascii_lowercase())
                .cmp(b.bytes().map(|x| x.to_ascii_lowercase())),
        }
    }
}

/// What to do with empty lines in a word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyLines {
    /// Ignore empty lines
    #[default]
    Skip,
    /// Fail the build with [`SpellcheckError::EmptyDictionaryEntry`]
    Reject,
}

/// Settings for a spell checking run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpellcheckConfig {
    /// Word list to load; discovered with [`crate::paths::find_dictionary_path`] when unset
    pub dictionary: Option<PathBuf>,
    /// Comparator for dictionary words
    pub collation: Collation,
    /// Policy for empty lines in the word list
    pub empty_lines: EmptyLines,
}

impl SpellcheckConfig {
    /// Reads a JSON configuration file. Missing keys take their default values.
    pub fn load<FS: Filesystem, P: AsRef<Path>>(
        fs: &FS,
        path: P,
    ) -> Result<SpellcheckConfig, SpellcheckError> {
        let path = path.as_ref();
        let config_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            SpellcheckError::Config {
                path: path.to_path_buf(),
                source,
            }
        };

        let file = fs.open(path).map_err(|e| config_error(e.into()))?;
        serde_json::from_reader(file).map_err(|e| config_error(e.into()))
    }

    /// The configured word list, or the discovered default.
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(crate::paths::find_dictionary_path)
    }
}
