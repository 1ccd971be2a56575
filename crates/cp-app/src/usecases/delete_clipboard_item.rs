use std::sync::Arc;

use anyhow::Result;
use cp_core::ItemKey;
use tracing::info;

use crate::store::HistoryStore;

/// Use case for deleting a single history item.
/// 删除单个历史条目的用例。
pub struct DeleteClipboardItem {
    store: Arc<HistoryStore>,
}

impl DeleteClipboardItem {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    /// Deletes the first item matching `key`, pinned or not.
    ///
    /// # Returns
    /// `Ok(true)` if an item was removed, `Ok(false)` if nothing matched.
    #[tracing::instrument(
        name = "usecase.delete_clipboard_item.execute",
        skip(self),
        fields(key = %key)
    )]
    pub async fn execute(&self, key: &ItemKey) -> Result<bool> {
        let removed = self.store.delete(key).await?;
        info!(removed, "Delete processed");
        Ok(removed)
    }
}
