//! Key-value state storage port
//!
//! Abstracts the persistent substrate that holds `clipboardHistory` and
//! `extensionSettings`. Values are opaque JSON; decoding and repair live in
//! [`crate::persistence`].

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait StateStoragePort: Send + Sync {
    /// Read the value stored under `key`, or `None` when the key was never written.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `key`.
    ///
    /// A returned error means the write did not happen.
    async fn set(&self, key: &str, value: Value) -> Result<()>;
}
