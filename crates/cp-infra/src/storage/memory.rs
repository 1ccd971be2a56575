use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use cp_core::ports::StateStoragePort;
use serde_json::Value;
use tokio::sync::RwLock;

/// Process-local storage, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryStateStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with existing values, e.g. records from an older version.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

#[async_trait]
impl StateStoragePort for InMemoryStateStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
