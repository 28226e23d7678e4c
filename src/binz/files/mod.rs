//! # File Access Layer
//!
//! Raw file I/O is abstracted behind the [`FileAccess`] trait so that both
//! the storage layer and the command layer can be exercised against an
//! in-memory backend, with no disk involved.
//!
//! ## Implementations
//!
//! - [`host::HostFs`]: production backend over the real file system
//! - [`memory::MemFs`]: in-memory backend for tests, with a write-failure
//!   switch for error-path coverage

use crate::error::Result;
use std::path::Path;

pub mod host;
pub mod memory;

/// Capability interface for raw file access.
///
/// A deliberately small, fully synchronous contract: whole-file reads,
/// whole-file overwrites, and JSON classification by file name.
pub trait FileAccess {
    /// Read the full contents of a file.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `data` to a file, replacing any existing contents.
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Whether the last path segment carries a `.json` suffix, compared
    /// case-insensitively. Directory components are ignored.
    fn is_json(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("json"))
    }
}

impl<T: FileAccess + ?Sized> FileAccess for &T {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        (**self).write(path, data)
    }
}
