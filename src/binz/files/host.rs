use super::FileAccess;
use crate::error::{BinzError, Result};
use std::fs;
use std::path::Path;

/// Production backend: a thin, synchronous wrapper over the host file
/// system. No caching, no locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl FileAccess for HostFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(BinzError::Io)
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(BinzError::Io)
    }
}
