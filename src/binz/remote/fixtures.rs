//! Scripted [`BinRemote`] fake for tests. Records every call and replays
//! queued metadata responses without opening a socket.

use super::{BinRemote, FetchedBin};
use crate::error::{BinzError, Result};
use crate::model::Bin;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    Create { name: String, content: Value },
    Update { id: String, content: Value },
    Delete { id: String },
    Get { id: String },
}

/// In-memory remote service for command tests.
///
/// Metadata responses are queued with [`script`](Self::script); when the
/// queue is empty the fixture synthesizes a plausible record so simple
/// tests need no setup. `fail_all` turns every call into an API error
/// before anything is recorded as succeeded.
#[derive(Debug, Default)]
pub struct ScriptedRemote {
    calls: RefCell<Vec<RemoteCall>>,
    responses: RefCell<VecDeque<Bin>>,
    record: RefCell<Value>,
    fail_all: RefCell<bool>,
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the metadata the next create/update/get should return.
    pub fn script(&self, bin: Bin) {
        self.responses.borrow_mut().push_back(bin);
    }

    /// Set the content record returned by `get`.
    pub fn set_record(&self, record: Value) {
        *self.record.borrow_mut() = record;
    }

    /// Make every subsequent call fail with an API error.
    pub fn fail_all(&self) {
        *self.fail_all.borrow_mut() = true;
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn check_failure(&self) -> Result<()> {
        if *self.fail_all.borrow() {
            return Err(BinzError::Api("scripted remote failure".to_string()));
        }
        Ok(())
    }

    fn next_response(&self, fallback: Bin) -> Bin {
        self.responses.borrow_mut().pop_front().unwrap_or(fallback)
    }
}

impl BinRemote for ScriptedRemote {
    fn create(&self, content: &Value, name: &str) -> Result<Bin> {
        self.check_failure()?;
        self.calls.borrow_mut().push(RemoteCall::Create {
            name: name.to_string(),
            content: content.clone(),
        });
        Ok(self.next_response(Bin::new("bin-scripted", true, name)))
    }

    fn update(&self, id: &str, content: &Value) -> Result<Bin> {
        self.check_failure()?;
        self.calls.borrow_mut().push(RemoteCall::Update {
            id: id.to_string(),
            content: content.clone(),
        });
        Ok(self.next_response(Bin::new(id, true, "scripted")))
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.check_failure()?;
        self.calls
            .borrow_mut()
            .push(RemoteCall::Delete { id: id.to_string() });
        Ok(())
    }

    fn get(&self, id: &str) -> Result<FetchedBin> {
        self.check_failure()?;
        self.calls
            .borrow_mut()
            .push(RemoteCall::Get { id: id.to_string() });
        Ok(FetchedBin {
            metadata: self.next_response(Bin::new(id, true, "scripted")),
            record: self.record.borrow().clone(),
        })
    }
}
