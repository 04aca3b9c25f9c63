//! Filesystem access used for word lists and subject files.
//!
//! The library never touches `std::fs` directly; everything goes through a
//! [`Filesystem`] so callers can substitute [`MemoryFs`] in tests.
use hashbrown::HashMap;
use std::fmt::Debug;
use std::io::{Cursor, Error, ErrorKind, Read, Result};
use std::path::{Path, PathBuf};

/// Source of readable files.
pub trait Filesystem {
    /// handle returned by [`Filesystem::open`]
    type File: File;

    /// Opens `path` for reading.
    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File>;

    /// Whether `path` names an existing regular file.
    fn is_file<P: AsRef<Path>>(&self, path: P) -> bool;
}

/// A readable file handle.
pub trait File: Read + Debug {}

impl File for std::fs::File {}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fs;

impl Filesystem for Fs {
    type File = std::fs::File;

    #[inline(always)]
    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        std::fs::File::open(path)
    }

    #[inline(always)]
    fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_file()
    }
}

#[derive(Debug, Clone)]
enum MemoryEntry {
    Contents(Vec<u8>),
    Unreadable,
}

/// In-memory filesystem.
///
/// Files registered with [`MemoryFs::insert_unreadable`] exist but fail to
/// open with `PermissionDenied`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: HashMap<PathBuf, MemoryEntry>,
}

impl MemoryFs {
    /// Creates an empty filesystem.
    pub fn new() -> MemoryFs {
        Self::default()
    }

    /// Adds a file with the given contents.
    pub fn insert<P: Into<PathBuf>, B: Into<Vec<u8>>>(&mut self, path: P, contents: B) {
        self.entries
            .insert(path.into(), MemoryEntry::Contents(contents.into()));
    }

    /// Adds a file that exists but cannot be opened.
    pub fn insert_unreadable<P: Into<PathBuf>>(&mut self, path: P) {
        self.entries.insert(path.into(), MemoryEntry::Unreadable);
    }
}

impl File for Cursor<Vec<u8>> {}

impl Filesystem for MemoryFs {
    type File = Cursor<Vec<u8>>;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        match self.entries.get(path.as_ref()) {
            Some(MemoryEntry::Contents(bytes)) => Ok(Cursor::new(bytes.clone())),
            Some(MemoryEntry::Unreadable) => {
                Err(Error::new(ErrorKind::PermissionDenied, "permission denied"))
            }
            None => Err(Error::new(ErrorKind::NotFound, "not found")),
        }
    }

    fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.contains_key(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_open() {
        let mut fs = MemoryFs::new();
        fs.insert("words", "alpha\nbeta\n");
        fs.insert_unreadable("secret");

        let mut buf = String::new();
        fs.open("words").unwrap().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "alpha\nbeta\n");

        assert!(fs.is_file("secret"));
        assert_eq!(
            fs.open("secret").unwrap_err().kind(),
            ErrorKind::PermissionDenied
        );

        assert!(!fs.is_file("missing"));
        assert_eq!(fs.open("missing").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn fs_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        assert!(!Fs.is_file(&path));
        assert!(!Fs.is_file(dir.path()));
        assert_eq!(Fs.open(&path).unwrap_err().kind(), ErrorKind::NotFound);
    }
}
