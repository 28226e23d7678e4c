use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BinzError, Result};
use crate::remote::BinRemote;
use crate::storage::BinStore;
use std::path::Path;

/// Delete a bin remotely and drop its record from the index.
///
/// The index load is fatal on failure, as with update. An id missing
/// from the index is a silent local no-op.
pub fn run<R: BinRemote, S: BinStore>(
    remote: &R,
    store: &S,
    index_path: &Path,
    id: &str,
) -> Result<CmdResult> {
    remote.delete(id)?;

    let mut list = store.load(index_path)?;
    let removed = list.remove(id);
    store
        .save(&list, index_path)
        .map_err(|e| BinzError::IndexSync(Box::new(e)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Bin deleted: {}", id)));
    Ok(result.with_affected(removed.into_iter().collect()))
}
