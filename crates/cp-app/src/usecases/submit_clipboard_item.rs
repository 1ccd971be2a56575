use std::sync::Arc;

use anyhow::Result;
use cp_core::CapturedText;
use tracing::info;

use crate::store::{HistoryStore, SubmitOutcome};

/// Use case for storing text captured from a copy action.
/// 保存复制操作捕获到的文本。
pub struct SubmitClipboardItem {
    store: Arc<HistoryStore>,
}

impl SubmitClipboardItem {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(
        name = "usecase.submit_clipboard_item.execute",
        skip(self, captured),
        fields(url = %captured.url, chars = captured.text.chars().count())
    )]
    pub async fn execute(&self, captured: CapturedText) -> Result<SubmitOutcome> {
        let (text, source) = captured.into_parts();
        let outcome = self.store.submit(&text, source).await?;

        match &outcome {
            SubmitOutcome::Admitted(item) => info!(id = %item.id, "Captured item stored"),
            other => info!(reason = other.reason(), "Captured item not stored"),
        }
        Ok(outcome)
    }
}
