//! Business logic for each operation: the synchronization core.
//!
//! Every mutating command calls the remote service first and reconciles
//! the local index only after remote success, so a network failure never
//! touches local state. Commands are generic over the capability traits,
//! return structured [`CmdResult`]s, and never write to stdout.

use crate::error::{BinzError, Result};
use crate::files::FileAccess;
use crate::model::Bin;
use serde_json::Value;
use std::path::Path;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, rendered by the CLI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Bins created, updated, deleted, or fetched by this command.
    pub affected: Vec<Bin>,
    /// Bins returned by a listing, in stored order.
    pub listed: Vec<Bin>,
    /// Content record returned by a fetch.
    pub record: Option<Value>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, bins: Vec<Bin>) -> Self {
        self.affected = bins;
        self
    }

    pub fn with_listed(mut self, bins: Vec<Bin>) -> Self {
        self.listed = bins;
        self
    }

    pub fn with_record(mut self, record: Value) -> Self {
        self.record = Some(record);
        self
    }
}

/// Read a local file and parse it as JSON. Runs before any network call,
/// so invalid content never reaches the remote service.
pub(crate) fn read_content<F: FileAccess>(files: &F, path: &Path) -> Result<Value> {
    let data = files.read(path)?;
    serde_json::from_slice(&data).map_err(BinzError::InvalidContent)
}
