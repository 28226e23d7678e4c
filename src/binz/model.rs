use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a single remote bin. The content payload lives only on the
/// remote service; the local index stores metadata alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: String,
    pub private: bool,
    pub created_at: DateTime<Utc>,
    pub name: String,
}

impl Bin {
    pub fn new(id: impl Into<String>, private: bool, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            private,
            created_at: Utc::now(),
            name: name.into(),
        }
    }
}

/// The ordered contents of the local index file: append on create, in-place
/// replace on update, removal on delete. Lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinList {
    pub bins: Vec<Bin>,
}

impl BinList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the first record whose id matches `bin.id`, keeping its
    /// position. Returns false and leaves the list unchanged when no record
    /// matches.
    pub fn replace(&mut self, bin: Bin) -> bool {
        match self.bins.iter_mut().find(|b| b.id == bin.id) {
            Some(slot) => {
                *slot = bin;
                true
            }
            None => false,
        }
    }

    /// Remove and return the first record with a matching id. The remote
    /// assigns ids, so duplicates should not occur; ties resolve to the
    /// first occurrence.
    pub fn remove(&mut self, id: &str) -> Option<Bin> {
        let pos = self.bins.iter().position(|b| b.id == id)?;
        Some(self.bins.remove(pos))
    }
}
