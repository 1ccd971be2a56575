use std::sync::Arc;

use anyhow::Result;
use cp_core::ItemKey;
use tracing::info;

use crate::store::HistoryStore;

/// Use case for pinning or unpinning a history item.
/// 置顶 / 取消置顶条目。
pub struct TogglePin {
    store: Arc<HistoryStore>,
}

impl TogglePin {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    /// Returns the item's new pinned state, or `None` if no item matched `key`.
    #[tracing::instrument(name = "usecase.toggle_pin.execute", skip(self), fields(key = %key))]
    pub async fn execute(&self, key: &ItemKey) -> Result<Option<bool>> {
        let pinned = self.store.toggle_pin(key).await?;
        info!(?pinned, "Pin toggled");
        Ok(pinned)
    }
}
