use crate::commands::{read_content, CmdMessage, CmdResult};
use crate::error::{BinzError, Result};
use crate::files::FileAccess;
use crate::remote::BinRemote;
use crate::storage::BinStore;
use std::path::Path;

/// Replace a bin's content from a local JSON file and refresh its index
/// record in place.
///
/// Unlike create, an index load failure here is fatal: there is nothing
/// sensible to merge the refreshed record into. An id missing from the
/// index is a silent local no-op; the remote store is the source of
/// truth and is simply ahead of the cache for that bin.
pub fn run<F: FileAccess, R: BinRemote, S: BinStore>(
    files: &F,
    remote: &R,
    store: &S,
    index_path: &Path,
    file: &Path,
    id: &str,
) -> Result<CmdResult> {
    let content = read_content(files, file)?;
    let bin = remote.update(id, &content)?;

    let mut list = store.load(index_path)?;
    list.replace(bin.clone());
    store
        .save(&list, index_path)
        .map_err(|e| BinzError::IndexSync(Box::new(e)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bin updated ({}): {}",
        bin.id, bin.name
    )));
    Ok(result.with_affected(vec![bin]))
}
