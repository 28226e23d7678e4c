//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all
//! binz operations, regardless of the UI driving them.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It owns the wired capabilities (file
//! access, remote service, index store) plus the index path, and holds
//! no other state. Business logic lives in `commands/*.rs`; presentation
//! lives in the CLI layer.
//!
//! `BinzApi` is generic over all three capability traits:
//! - Production: `BinzApi<HostFs, HttpBinService, JsonStorage<HostFs>>`
//! - Testing: `BinzApi<MemFs, ScriptedRemote, JsonStorage<&MemFs>>`

use crate::commands;
use crate::error::Result;
use crate::files::FileAccess;
use crate::remote::BinRemote;
use crate::storage::BinStore;
use std::path::{Path, PathBuf};

/// The main API facade for binz operations.
pub struct BinzApi<F: FileAccess, R: BinRemote, S: BinStore> {
    files: F,
    remote: R,
    store: S,
    index_path: PathBuf,
}

impl<F: FileAccess, R: BinRemote, S: BinStore> BinzApi<F, R, S> {
    pub fn new(files: F, remote: R, store: S, index_path: impl Into<PathBuf>) -> Self {
        Self {
            files,
            remote,
            store,
            index_path: index_path.into(),
        }
    }

    pub fn create_bin(&self, file: &Path, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(
            &self.files,
            &self.remote,
            &self.store,
            &self.index_path,
            file,
            name,
        )
    }

    pub fn update_bin(&self, file: &Path, id: &str) -> Result<commands::CmdResult> {
        commands::update::run(
            &self.files,
            &self.remote,
            &self.store,
            &self.index_path,
            file,
            id,
        )
    }

    pub fn delete_bin(&self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&self.remote, &self.store, &self.index_path, id)
    }

    pub fn get_bin(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.remote, id)
    }

    pub fn list_bins(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.index_path)
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
