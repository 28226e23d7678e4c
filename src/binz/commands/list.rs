use crate::commands::CmdResult;
use crate::error::Result;
use crate::storage::BinStore;
use std::path::Path;

/// List bins from the local index, in stored order. Never contacts the
/// remote service; load errors propagate and the caller decides whether
/// a missing index means "no bins yet" or a real failure.
pub fn run<S: BinStore>(store: &S, index_path: &Path) -> Result<CmdResult> {
    let list = store.load(index_path)?;
    Ok(CmdResult::default().with_listed(list.bins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinzError;
    use crate::files::memory::MemFs;
    use crate::model::{Bin, BinList};
    use crate::storage::JsonStorage;
    use std::path::Path;

    const INDEX: &str = "bins.json";

    #[test]
    fn list_returns_records_in_stored_order() {
        let fs = MemFs::new();
        let store = JsonStorage::new(&fs);
        store
            .save(
                &BinList {
                    bins: vec![
                        Bin::new("bin-2", false, "second"),
                        Bin::new("bin-1", true, "first"),
                    ],
                },
                Path::new(INDEX),
            )
            .unwrap();

        let result = run(&store, Path::new(INDEX)).unwrap();
        let ids: Vec<&str> = result.listed.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bin-2", "bin-1"]);
    }

    #[test]
    fn an_empty_index_lists_nothing() {
        let fs = MemFs::new();
        let store = JsonStorage::new(&fs);
        store.save(&BinList::new(), Path::new(INDEX)).unwrap();

        let result = run(&store, Path::new(INDEX)).unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn a_missing_index_propagates_the_load_error() {
        let fs = MemFs::new();
        let store = JsonStorage::new(&fs);

        let err = run(&store, Path::new(INDEX)).unwrap_err();
        assert!(matches!(err, BinzError::Io(_)));
    }
}
