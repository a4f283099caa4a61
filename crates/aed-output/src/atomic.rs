//! Atomic file writes.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Write `bytes` to `path` through a sibling temp file and a rename.
///
/// The temp file lives in the destination directory so the rename never
/// crosses a filesystem. On failure the temp file is removed and any
/// existing file at `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// `out.json` -> `.out.json.tmp`, in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_path_is_a_hidden_sibling() {
        let temp = temp_path_for(Path::new("/data/out.json"));
        assert_eq!(temp, PathBuf::from("/data/.out.json.tmp"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join(".out.json.tmp").exists());
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.json");

        write_atomic(&path, b"[]").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_failed_rename_keeps_target() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the target path cannot be replaced by a file.
        let target = dir.path().join("out.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        let err = write_atomic(&target, b"[]").unwrap_err();

        assert!(matches!(err, OutputError::AtomicWriteFailed { .. }));
        assert!(target.join("keep").exists());
        assert!(!dir.path().join(".out.json.tmp").exists());
    }
}
