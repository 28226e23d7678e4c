use crate::commands::CmdResult;
use crate::error::Result;
use crate::remote::BinRemote;

/// Fetch a bin straight from the remote service, content included.
///
/// The only read path that bypasses the local index. The fresh metadata
/// is returned for display but never written back to the index, so the
/// cache may stay stale after a get.
pub fn run<R: BinRemote>(remote: &R, id: &str) -> Result<CmdResult> {
    let fetched = remote.get(id)?;
    Ok(CmdResult::default()
        .with_affected(vec![fetched.metadata])
        .with_record(fetched.record))
}
