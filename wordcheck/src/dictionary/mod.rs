//! The set of known words.
//!
//! A dictionary is filled through a [`DictionaryBuilder`] and frozen into a
//! [`Dictionary`]; there is no way to insert into a dictionary that is
//! already answering queries.
use std::cmp::Ordering;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use smol_str::SmolStr;

use self::tree::WordTree;
use crate::config::{Collation, EmptyLines, SpellcheckConfig};
use crate::error::SpellcheckError;
use crate::vfs::Filesystem;

mod tree;

/// Collects words for a [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    collation: Collation,
    words: Vec<SmolStr>,
}

impl DictionaryBuilder {
    /// Creates an empty builder ordering words by `collation`.
    pub fn new(collation: Collation) -> DictionaryBuilder {
        DictionaryBuilder {
            collation,
            words: vec![],
        }
    }

    /// Adds a word. Inserting a word twice is a no-op.
    ///
    /// Returns `false`, leaving the builder untouched, for the empty string
    /// and for words containing a line terminator.
    pub fn insert<S: Into<SmolStr>>(&mut self, word: S) -> bool {
        let word = word.into();

        if word.is_empty() || word.contains(['\n', '\r']) {
            log::trace!("ignoring dictionary entry {:?}", word);
            return false;
        }

        self.words.push(word);
        true
    }

    /// Number of inserted words, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads one word per line from `reader`, stripping `\n` or `\r\n`.
    ///
    /// Lines are decoded as UTF-8, replacing invalid sequences. `source`
    /// only labels errors.
    pub fn read_lines<R: Read>(
        &mut self,
        reader: R,
        source: &Path,
        empty_lines: EmptyLines,
    ) -> Result<(), SpellcheckError> {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::with_capacity(64);
        let mut line = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source_err| {
                SpellcheckError::DictionarySourceUnavailable {
                    path: source.to_path_buf(),
                    source: source_err,
                }
            })?;

            if read == 0 {
                break;
            }
            line += 1;

            let mut bytes = &buf[..];
            if let Some(rest) = bytes.strip_suffix(b"\n") {
                bytes = rest;
            }
            if let Some(rest) = bytes.strip_suffix(b"\r") {
                bytes = rest;
            }

            if bytes.is_empty() {
                match empty_lines {
                    EmptyLines::Skip => continue,
                    EmptyLines::Reject => {
                        return Err(SpellcheckError::EmptyDictionaryEntry { line })
                    }
                }
            }

            let word = String::from_utf8_lossy(bytes);
            self.insert(&*word);
        }

        log::debug!("read {} lines from {}", line, source.display());
        Ok(())
    }

    /// Freezes the collected words into a [`Dictionary`].
    ///
    /// Words equal under the collation collapse to the one inserted first.
    pub fn build(self) -> Dictionary {
        let DictionaryBuilder {
            collation,
            mut words,
        } = self;

        let inserted = words.len();
        words.sort_by(|a, b| collation.compare(a, b));
        words.dedup_by(|later, earlier| collation.compare(later, earlier) == Ordering::Equal);
        log::debug!("built dictionary: {} unique of {} words", words.len(), inserted);

        Dictionary {
            tree: WordTree::from_sorted(words, collation),
        }
    }
}

impl<S: Into<SmolStr>> Extend<S> for DictionaryBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// An immutable, deduplicated, ordered set of known words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tree: WordTree,
}

impl Dictionary {
    /// Builds a dictionary from `words` ordered by `collation`.
    pub fn build<I, S>(words: I, collation: Collation) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let mut builder = DictionaryBuilder::new(collation);
        builder.extend(words);
        builder.build()
    }

    /// Loads the word list named by `config` from `fs`.
    pub fn load<FS: Filesystem>(
        fs: &FS,
        config: &SpellcheckConfig,
    ) -> Result<Dictionary, SpellcheckError> {
        let path = config.dictionary_path();
        let file = fs
            .open(&path)
            .map_err(|source| SpellcheckError::DictionarySourceUnavailable {
                path: path.clone(),
                source,
            })?;

        Dictionary::from_reader(file, &path, config)
    }

    /// Builds a dictionary from a line-oriented word list.
    pub fn from_reader<R: Read>(
        reader: R,
        source: &Path,
        config: &SpellcheckConfig,
    ) -> Result<Dictionary, SpellcheckError> {
        let mut builder = DictionaryBuilder::new(config.collation);
        builder.read_lines(reader, source, config.empty_lines)?;
        Ok(builder.build())
    }

    /// Whether `word` is in the dictionary under its collation.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The comparator used for building and lookups.
    pub fn collation(&self) -> Collation {
        self.tree.collation()
    }

    /// Iterates over the words in collation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tree.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{Fs, MemoryFs};
    use std::io::{Cursor, ErrorKind, Write};
    use std::path::PathBuf;

    const WORDS: &[&str] = &["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];

    fn config(path: &str) -> SpellcheckConfig {
        SpellcheckConfig {
            dictionary: Some(PathBuf::from(path)),
            ..SpellcheckConfig::default()
        }
    }

    #[test]
    fn contains_every_inserted_word() {
        let dict = Dictionary::build(WORDS.iter().copied(), Collation::Bytewise);
        assert_eq!(dict.len(), WORDS.len());
        for w in WORDS {
            assert!(dict.contains(w), "{}", w);
        }
        for w in ["", "The", "quik", "dogs", "fo", "zebra", "a"] {
            assert!(!dict.contains(w), "{}", w);
        }
    }

    #[test]
    fn duplicates_are_idempotent() {
        let once = Dictionary::build(WORDS.iter().copied(), Collation::Bytewise);
        let twice = Dictionary::build(
            WORDS.iter().chain(WORDS.iter()).copied(),
            Collation::Bytewise,
        );
        assert_eq!(once.len(), twice.len());
        assert_eq!(once.iter().collect::<Vec<_>>(), twice.iter().collect::<Vec<_>>());
        for w in ["the", "fox", "cat", "", "Dog"] {
            assert_eq!(once.contains(w), twice.contains(w));
        }
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let mut sorted: Vec<String> = (0..500).map(|i| format!("w{:03}", i)).collect();
        sorted.sort();
        let mut reversed = sorted.clone();
        reversed.reverse();

        let a = Dictionary::build(sorted.clone(), Collation::Bytewise);
        let b = Dictionary::build(reversed, Collation::Bytewise);
        for w in sorted.iter().map(String::as_str).chain(["w500", "w", "x000"]) {
            assert_eq!(a.contains(w), b.contains(w), "{}", w);
        }
        assert!(a.contains("w499"));
        assert!(!a.contains("w500"));
    }

    #[test]
    fn rejects_malformed_entries() {
        let mut builder = DictionaryBuilder::new(Collation::Bytewise);
        assert!(!builder.insert(""));
        assert!(!builder.insert("two\nlines"));
        assert!(!builder.insert("cr\r"));
        assert!(builder.insert("fine"));
        assert_eq!(builder.len(), 1);

        let dict = builder.build();
        assert!(dict.contains("fine"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn case_insensitive_collation() {
        let dict = Dictionary::build(["Paris", "paris", "apple"], Collation::AsciiCaseInsensitive);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["apple", "Paris"]);
        assert!(dict.contains("PARIS"));
        assert!(dict.contains("Apple"));
        assert!(!dict.contains("pear"));

        let strict = Dictionary::build(["Paris", "apple"], Collation::Bytewise);
        assert!(!strict.contains("paris"));
        assert!(!strict.contains("Apple"));
    }

    #[test]
    fn from_reader_strips_terminators_and_skips_empty_lines() {
        let source = "alpha\r\nbeta\n\n\r\ngamma";
        let dict = Dictionary::from_reader(
            Cursor::new(source),
            Path::new("words"),
            &SpellcheckConfig::default(),
        )
        .unwrap();

        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
        assert!(!dict.contains("alpha\r"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn from_reader_rejects_empty_lines() {
        let config = SpellcheckConfig {
            empty_lines: EmptyLines::Reject,
            ..SpellcheckConfig::default()
        };
        let err = Dictionary::from_reader(Cursor::new("alpha\n\nbeta\n"), Path::new("words"), &config)
            .unwrap_err();
        assert!(matches!(err, SpellcheckError::EmptyDictionaryEntry { line: 2 }));

        let dict =
            Dictionary::from_reader(Cursor::new("alpha\nbeta\n"), Path::new("words"), &config)
                .unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn from_reader_replaces_invalid_utf8() {
        let dict = Dictionary::from_reader(
            Cursor::new(b"caf\xe9\nok\n".to_vec()),
            Path::new("latin1"),
            &SpellcheckConfig::default(),
        )
        .unwrap();
        assert!(dict.contains("caf\u{fffd}"));
        assert!(dict.contains("ok"));
    }

    #[test]
    fn load_from_memory_fs() {
        let mut fs = MemoryFs::new();
        fs.insert("/dict/words", "the\nquick\nbrown\nfox\n");

        let dict = Dictionary::load(&fs, &config("/dict/words")).unwrap();
        assert_eq!(dict.len(), 4);
        assert!(dict.contains("quick"));
    }

    #[test]
    fn load_unavailable_source() {
        let mut fs = MemoryFs::new();
        fs.insert_unreadable("/dict/locked");

        match Dictionary::load(&fs, &config("/dict/missing")) {
            Err(SpellcheckError::DictionarySourceUnavailable { path, source }) => {
                assert_eq!(path, PathBuf::from("/dict/missing"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert!(matches!(
            Dictionary::load(&fs, &config("/dict/locked")),
            Err(SpellcheckError::DictionarySourceUnavailable { .. })
        ));
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zebra").unwrap();
        writeln!(file, "aardvark").unwrap();
        writeln!(file, "zebra").unwrap();
        file.flush().unwrap();

        let config = SpellcheckConfig {
            dictionary: Some(file.path().to_path_buf()),
            ..SpellcheckConfig::default()
        };
        let dict = Dictionary::load(&Fs, &config).unwrap();
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec!["aardvark", "zebra"]);
    }
}
