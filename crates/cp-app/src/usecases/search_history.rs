//! Use case for the panel's history list
//! 面板历史列表（搜索 + 排序）

use std::sync::Arc;

use anyhow::Result;
use cp_core::clipboard::{display_order, item_count_label, ClipboardItemView, HistoryFilter};
use cp_core::Settings;
use serde::Serialize;
use tracing::{debug, info_span, Instrument};

use crate::store::HistoryStore;

/// What the panel renders for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Matching items in display order.
    pub items: Vec<ClipboardItemView>,
    /// `"N items"` over the matches.
    pub count_label: String,
    /// Size of the whole history, before filtering.
    pub total: usize,
    pub settings: Settings,
}

/// Filters and orders the history for display. Nothing is written back.
pub struct SearchHistory {
    store: Arc<HistoryStore>,
}

impl SearchHistory {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, query: &str) -> Result<SearchResults> {
        let span = info_span!("usecase.search_history.execute", query_len = query.len());

        async {
            let state = self.store.snapshot().await?;
            let filter = HistoryFilter::new(query);

            let items: Vec<ClipboardItemView> =
                display_order(state.history.iter().filter(|item| filter.matches(item)))
                    .into_iter()
                    .map(ClipboardItemView::from)
                    .collect();

            debug!(matches = items.len(), total = state.history.len(), "History searched");
            Ok(SearchResults {
                count_label: item_count_label(items.len()),
                total: state.history.len(),
                items,
                settings: state.settings,
            })
        }
        .instrument(span)
        .await
    }
}
