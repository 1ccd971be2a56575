use std::sync::Arc;

use anyhow::Result;
use cp_core::ItemSource;
use tracing::info;

use crate::store::{HistoryStore, SubmitOutcome};

/// Use case for saving text typed into the panel as a manual entry.
///
/// Goes through the same admission path as captured text, so the duplicate
/// window and capacity rules apply to it as well.
pub struct AddManualItem {
    store: Arc<HistoryStore>,
}

impl AddManualItem {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.add_manual_item.execute", skip(self, text))]
    pub async fn execute(&self, text: &str) -> Result<SubmitOutcome> {
        let outcome = self.store.submit(text, ItemSource::Manual).await?;

        info!(
            admitted = outcome.is_admitted(),
            reason = outcome.reason(),
            "Manual entry processed"
        );
        Ok(outcome)
    }
}
