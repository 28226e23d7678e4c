//! # Remote Bin Service
//!
//! Everything that talks to the hosted bin service goes through the
//! [`BinRemote`] trait. The production implementation is
//! [`http::HttpBinService`]; tests script responses with
//! [`fixtures::ScriptedRemote`] and never open a socket.

use crate::error::Result;
use crate::model::Bin;
use serde_json::Value;

pub mod http;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

/// A bin fetched from the remote service: metadata plus the stored content
/// record.
#[derive(Debug, Clone)]
pub struct FetchedBin {
    pub metadata: Bin,
    pub record: Value,
}

/// Capability interface for the remote bin service.
///
/// Content arrives here already parsed; the service does not re-validate
/// it. Every operation is a single authenticated round trip.
pub trait BinRemote {
    /// Create a new bin named `name` holding `content`. Bins are always
    /// created private.
    fn create(&self, content: &Value, name: &str) -> Result<Bin>;

    /// Replace the content of bin `id`. Name and visibility are not
    /// touched by the remote on update.
    fn update(&self, id: &str, content: &Value) -> Result<Bin>;

    /// Delete bin `id`.
    fn delete(&self, id: &str) -> Result<()>;

    /// Fetch bin `id`, content record included. The only read path that
    /// bypasses the local index.
    fn get(&self, id: &str) -> Result<FetchedBin>;
}

impl<T: BinRemote + ?Sized> BinRemote for &T {
    fn create(&self, content: &Value, name: &str) -> Result<Bin> {
        (**self).create(content, name)
    }

    fn update(&self, id: &str, content: &Value) -> Result<Bin> {
        (**self).update(id, content)
    }

    fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id)
    }

    fn get(&self, id: &str) -> Result<FetchedBin> {
        (**self).get(id)
    }
}
