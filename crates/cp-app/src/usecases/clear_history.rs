use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use crate::store::HistoryStore;

/// Use case for clearing the whole history, pinned items included.
///
/// Confirmation is the caller's job; by the time this runs the user agreed.
pub struct ClearHistory {
    store: Arc<HistoryStore>,
}

impl ClearHistory {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<usize> {
        let span = info_span!("usecase.clear_history.execute");

        async {
            let removed = self.store.clear_all().await?;
            info!(removed, "History cleared");
            Ok(removed)
        }
        .instrument(span)
        .await
    }
}
