use super::FileAccess;
use crate::error::{BinzError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory file backend for tests.
///
/// Uses `RefCell` for interior mutability since binz is single-threaded;
/// the `FileAccess` trait can then take `&self` for all methods.
#[derive(Debug, Default)]
pub struct MemFs {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    fail_writes: RefCell<bool>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file.
    pub fn insert(&self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), data.into());
    }

    /// Make every subsequent write fail, for error-path tests.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains_key(path.as_ref())
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl FileAccess for MemFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            BinzError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        if *self.fail_writes.borrow() {
            return Err(BinzError::Io(io::Error::other("simulated write error")));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_missing_file_is_not_found() {
        let fs = MemFs::new();
        let err = fs.read(Path::new("absent.json")).unwrap_err();
        match err {
            BinzError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io error, got: {other}"),
        }
    }

    #[test]
    fn writes_can_be_made_to_fail() {
        let fs = MemFs::new();
        fs.set_fail_writes(true);
        assert!(fs.write(Path::new("bins.json"), b"{}").is_err());
        assert!(!fs.contains("bins.json"));
    }
}
