use crate::error::{BinzError, Result};
use crate::files::FileAccess;
use crate::model::BinList;
use std::path::Path;

/// Capability interface for the local metadata index.
///
/// A single local client is assumed: there is no locking, and concurrent
/// processes writing the same index race with last-writer-wins.
pub trait BinStore {
    /// Load the ordered bin list from the index file at `path`.
    fn load(&self, path: &Path) -> Result<BinList>;

    /// Serialize `list` and overwrite the index file at `path`.
    fn save(&self, list: &BinList, path: &Path) -> Result<()>;
}

/// JSON-file index store over an injected [`FileAccess`] backend.
///
/// The `.json` extension rule is enforced here, at save/load time, so a
/// misconfigured path fails regardless of whether the file exists. The
/// index is written indented to stay human-diffable.
pub struct JsonStorage<F: FileAccess> {
    files: F,
}

impl<F: FileAccess> JsonStorage<F> {
    pub fn new(files: F) -> Self {
        Self { files }
    }
}

impl<F: FileAccess> BinStore for JsonStorage<F> {
    fn load(&self, path: &Path) -> Result<BinList> {
        if !self.files.is_json(path) {
            return Err(BinzError::InvalidExtension(path.to_path_buf()));
        }
        let data = self.files.read(path)?;
        serde_json::from_slice(&data).map_err(BinzError::MalformedIndex)
    }

    fn save(&self, list: &BinList, path: &Path) -> Result<()> {
        if !self.files.is_json(path) {
            return Err(BinzError::InvalidExtension(path.to_path_buf()));
        }
        let data = serde_json::to_vec_pretty(list).map_err(BinzError::MalformedIndex)?;
        self.files.write(path, &data)
    }
}
