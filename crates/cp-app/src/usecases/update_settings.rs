//! Use case for updating settings
//! 更新设置的用例

use std::sync::Arc;

use anyhow::Result;
use cp_core::{Settings, SettingsUpdate};
use tracing::{info, info_span, Instrument};

use crate::store::HistoryStore;

/// Use case for saving settings from the panel.
///
/// ## Behavior / 行为
/// - Loads current settings for comparison
/// - Logs changed fields with old/new values
/// - Validates ranges and persists through the store, which re-applies
///   retention to the history and signals `historyUpdated`
///
/// Validation failures come back as [`crate::HistoryStoreError::Validation`]
/// with the message shown to the user; nothing is written in that case.
pub struct UpdateSettings {
    store: Arc<HistoryStore>,
}

impl UpdateSettings {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, update: SettingsUpdate) -> Result<Settings> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old_settings = self.store.current_settings().await?;

            let changes = SettingsDiff::diff(&old_settings, &update);
            if !changes.is_empty() {
                info!(
                    changed_fields = %changes.to_log_string(),
                    "Updating settings"
                );
            } else {
                info!("Updating settings (no changes detected)");
            }

            let saved = self.store.update_settings(update).await?;

            info!(
                changed_fields = %changes.to_log_string(),
                "Settings updated successfully"
            );
            Ok(saved)
        }
        .instrument(span)
        .await
    }
}

/// Field-level difference between stored settings and a submitted update.
#[derive(Debug, Default, PartialEq, Eq)]
struct SettingsDiff {
    max_items: Option<(i64, i64)>,
    auto_cleanup_days: Option<(i64, i64)>,
    dark_mode: Option<(bool, bool)>,
}

impl SettingsDiff {
    fn diff(old: &Settings, new: &SettingsUpdate) -> Self {
        let old = SettingsUpdate::from(*old);
        Self {
            max_items: changed(old.max_items, new.max_items),
            auto_cleanup_days: changed(old.auto_cleanup_days, new.auto_cleanup_days),
            dark_mode: changed(old.dark_mode, new.dark_mode),
        }
    }

    fn is_empty(&self) -> bool {
        self.max_items.is_none() && self.auto_cleanup_days.is_none() && self.dark_mode.is_none()
    }

    fn to_log_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some((old, new)) = self.max_items {
            parts.push(format!("max_items: {old} -> {new}"));
        }
        if let Some((old, new)) = self.auto_cleanup_days {
            parts.push(format!("auto_cleanup_days: {old} -> {new}"));
        }
        if let Some((old, new)) = self.dark_mode {
            parts.push(format!("dark_mode: {old} -> {new}"));
        }

        if parts.is_empty() {
            "(no changes)".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn changed<T: PartialEq + Copy>(old: T, new: T) -> Option<(T, T)> {
    (old != new).then_some((old, new))
}
