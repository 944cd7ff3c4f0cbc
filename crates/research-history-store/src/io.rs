//! Whole-file reads and in-place overwrites

use std::io::ErrorKind;
use std::path::Path;

/// Read a file's bytes, or `None` if it does not exist
///
/// Every other failure (permissions, a directory in the way) is returned.
pub fn read_if_exists(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Truncate and rewrite `path` in place
///
/// Not atomic: a crash mid-write leaves a truncated file. Symlinks are
/// followed, and the file's own permissions apply. The parent directory must
/// already exist.
pub fn overwrite(path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, data)
}
