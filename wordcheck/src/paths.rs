//! Locating the system word list.
use std::path::PathBuf;

use crate::constants::DEFAULT_DICTIONARY_PATH;
use crate::vfs::{Filesystem, Fs};

#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &[DEFAULT_DICTIONARY_PATH, "/usr/share/dict/web2"];

#[cfg(not(target_os = "macos"))]
const CANDIDATES: &[&str] = &[
    DEFAULT_DICTIONARY_PATH,
    "/usr/dict/words",
    "/usr/share/dict/american-english",
    "/usr/share/dict/british-english",
];

/// Finds the first installed system word list, falling back to `/usr/share/dict/words`.
pub fn find_dictionary_path() -> PathBuf {
    find_dictionary_path_in(&Fs)
}

/// Like [`find_dictionary_path`], probing the given filesystem.
pub fn find_dictionary_path_in<FS: Filesystem>(fs: &FS) -> PathBuf {
    CANDIDATES
        .iter()
        .find(|path| fs.is_file(path))
        .map(|path| PathBuf::from(*path))
        .unwrap_or_else(|| {
            log::debug!("no word list found, defaulting to {}", DEFAULT_DICTIONARY_PATH);
            PathBuf::from(DEFAULT_DICTIONARY_PATH)
        })
}
