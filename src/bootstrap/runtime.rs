//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired store and the shared capture guard.
//! `UseCases` hands out use case instances with their dependencies pre-wired.
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn example(runtime: &clipo_lib::bootstrap::AppRuntime) -> anyhow::Result<()> {
//! let results = runtime.usecases().search_history().execute("rust").await?;
//! println!("{}", results.count_label);
//! # Ok(())
//! # }
//! ```
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `new()` constructor taking the store
//! 2. Add a method to `UseCases` that calls `new()`

use std::sync::Arc;

use cp_app::usecases::{
    AddManualItem, ClearHistory, DeleteClipboardItem, GetSettings, LoadHistory, SearchHistory,
    SubmitClipboardItem, TogglePin, UpdateSettings,
};
use cp_app::{CaptureGuard, HistoryStore};
use cp_core::config::AppConfig;
use cp_infra::{BroadcastHistoryNotifier, HistoryUpdated};
use tokio::sync::broadcast;

/// Application runtime with dependencies.
///
/// 包含所有应用依赖的运行时。
pub struct AppRuntime {
    /// Resolved configuration the runtime was built from
    pub config: AppConfig,
    store: Arc<HistoryStore>,
    notifier: BroadcastHistoryNotifier,
    capture_guard: CaptureGuard,
}

impl AppRuntime {
    pub fn new(
        config: AppConfig,
        store: Arc<HistoryStore>,
        notifier: BroadcastHistoryNotifier,
    ) -> Self {
        Self {
            config,
            store,
            notifier,
            capture_guard: CaptureGuard::new(),
        }
    }

    /// Get use cases accessor.
    /// 获取用例访问器。
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }

    /// Subscribe to `historyUpdated` signals.
    pub fn subscribe(&self) -> broadcast::Receiver<HistoryUpdated> {
        self.notifier.subscribe()
    }

    pub fn capture_guard(&self) -> &CaptureGuard {
        &self.capture_guard
    }
}

/// Use cases accessor.
///
/// Each method returns a fresh use case instance sharing the runtime's store.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    fn store(&self) -> Arc<HistoryStore> {
        Arc::clone(&self.runtime.store)
    }

    pub fn load_history(&self) -> LoadHistory {
        LoadHistory::new(self.store())
    }

    pub fn submit_clipboard_item(&self) -> SubmitClipboardItem {
        SubmitClipboardItem::new(self.store())
    }

    pub fn add_manual_item(&self) -> AddManualItem {
        AddManualItem::new(self.store())
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.store())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.store())
    }

    pub fn search_history(&self) -> SearchHistory {
        SearchHistory::new(self.store())
    }

    pub fn toggle_pin(&self) -> TogglePin {
        TogglePin::new(self.store())
    }

    pub fn delete_clipboard_item(&self) -> DeleteClipboardItem {
        DeleteClipboardItem::new(self.store())
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.store())
    }
}
