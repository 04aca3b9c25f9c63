//! Turning a raw command line subject into the text to check.
use std::io::Read;
use std::path::Path;

use crate::error::SpellcheckError;
use crate::vfs::Filesystem;

/// Resolves `raw` to text: the contents of the file it names, if `fs` has
/// such a file, otherwise `raw` itself.
///
/// File contents are decoded as UTF-8, replacing invalid sequences, the same
/// way word lists are read.
pub fn resolve_subject_text<FS: Filesystem>(fs: &FS, raw: &str) -> Result<String, SpellcheckError> {
    if raw.is_empty() || !fs.is_file(raw) {
        return Ok(raw.to_string());
    }

    log::debug!("reading subject from file {}", raw);
    let unavailable = |source| SpellcheckError::SubjectUnavailable {
        path: Path::new(raw).to_path_buf(),
        source,
    };

    let mut file = fs.open(raw).map_err(unavailable)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(unavailable)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
