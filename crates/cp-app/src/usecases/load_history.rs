//! Use case for loading history and settings when a context starts
//! 加载历史与设置的用例

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use crate::store::{HistoryStore, LoadedState};

/// Loads history and settings, applying migrations and auto-cleanup.
pub struct LoadHistory {
    store: Arc<HistoryStore>,
}

impl LoadHistory {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<LoadedState> {
        let span = info_span!("usecase.load_history.execute");

        async {
            let state = self.store.load().await?;

            info!(
                items = state.history.len(),
                max_items = state.settings.max_items,
                auto_cleanup_days = state.settings.auto_cleanup_days,
                "History loaded"
            );
            Ok(state)
        }
        .instrument(span)
        .await
    }
}
