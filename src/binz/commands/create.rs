use crate::commands::{read_content, CmdMessage, CmdResult};
use crate::error::{BinzError, Result};
use crate::files::FileAccess;
use crate::remote::BinRemote;
use crate::storage::BinStore;
use std::path::Path;

/// Create a bin from a local JSON file and append its metadata to the
/// index.
///
/// A missing or unreadable index is tolerated here and treated as empty,
/// so first-time use needs no pre-created index file. An index save
/// failure after the remote create succeeded surfaces as `IndexSync`:
/// the bin exists remotely but the local index has drifted.
pub fn run<F: FileAccess, R: BinRemote, S: BinStore>(
    files: &F,
    remote: &R,
    store: &S,
    index_path: &Path,
    file: &Path,
    name: &str,
) -> Result<CmdResult> {
    let content = read_content(files, file)?;
    let bin = remote.create(&content, name)?;

    let mut list = store.load(index_path).unwrap_or_default();
    list.bins.push(bin.clone());
    store
        .save(&list, index_path)
        .map_err(|e| BinzError::IndexSync(Box::new(e)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bin created ({}): {}",
        bin.id, bin.name
    )));
    Ok(result.with_affected(vec![bin]))
}
