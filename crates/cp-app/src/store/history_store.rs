use std::sync::Arc;

use anyhow::Context;
use cp_core::clipboard::{next_free_created_at, ClipboardItem, ItemKey, ItemSource};
use cp_core::persistence::{
    decode_history, decode_settings, encode_history, encode_settings, DecodedHistory,
    HISTORY_KEY, SETTINGS_KEY,
};
use cp_core::ports::{ClockPort, HistoryNotifierPort, NotificationError, StateStoragePort};
use cp_core::retention::{admit, reapply_settings};
use cp_core::{AdmitOutcome, Settings, SettingsUpdate};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::error::HistoryStoreError;
use crate::deps::AppDeps;

/// History and settings as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    pub history: Vec<ClipboardItem>,
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; carries the item as persisted.
    Admitted(ClipboardItem),
    /// Same text within the duplicate window. History unchanged.
    Duplicate,
    /// Text was empty after trimming. History unchanged.
    Empty,
}

impl SubmitOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, SubmitOutcome::Admitted(_))
    }

    /// Rejection reason reported to the submitting context.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Admitted(_) => None,
            SubmitOutcome::Duplicate => Some("duplicate"),
            SubmitOutcome::Empty => Some("empty"),
        }
    }
}

/// Owns the persisted `clipboardHistory` / `extensionSettings` pair.
///
/// Capture and panel contexts both write through one store. Every
/// read-modify-write cycle runs under `write_lock`, so two submits can never
/// read the same history and overwrite each other. Retention runs
/// synchronously inside the cycle; only storage I/O suspends.
pub struct HistoryStore {
    storage: Arc<dyn StateStoragePort>,
    notifier: Arc<dyn HistoryNotifierPort>,
    clock: Arc<dyn ClockPort>,
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(
        storage: Arc<dyn StateStoragePort>,
        notifier: Arc<dyn HistoryNotifierPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            storage,
            notifier,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_deps(deps: AppDeps) -> Self {
        Self::new(deps.storage, deps.notifier, deps.clock)
    }

    /// Load history and settings, repairing what an older version left behind.
    ///
    /// Absent or partial settings are merged with defaults and written back.
    /// Legacy history records are migrated and auto-cleanup is applied; the
    /// history is written at most once, and only if something changed.
    pub async fn load(&self) -> Result<LoadedState, HistoryStoreError> {
        let _guard = self.write_lock.lock().await;

        let stored = decode_settings(self.get(SETTINGS_KEY).await?);
        if stored.needs_write_back {
            info!("Writing back default-merged settings");
            self.write_settings(&stored.settings).await?;
        }
        let settings = stored.settings;

        let decoded = self.read_history().await?;
        let repaired = decoded.needs_write_back();
        if repaired {
            info!(
                migrated = decoded.migrated,
                dropped = decoded.dropped,
                "Migrating persisted history records"
            );
        }

        let (history, report) = reapply_settings(decoded.items, &settings, self.clock.now_ms());
        if repaired || !report.is_empty() {
            self.write_history(&history).await?;
        }

        debug!(items = history.len(), "History loaded");
        Ok(LoadedState { history, settings })
    }

    /// Read the current state without repairing or writing anything.
    pub async fn snapshot(&self) -> Result<LoadedState, HistoryStoreError> {
        let settings = decode_settings(self.get(SETTINGS_KEY).await?).settings;
        let history = self.read_history().await?.items;
        Ok(LoadedState { history, settings })
    }

    pub async fn current_settings(&self) -> Result<Settings, HistoryStoreError> {
        Ok(decode_settings(self.get(SETTINGS_KEY).await?).settings)
    }

    /// Build a candidate from `text` and run it through admission.
    ///
    /// The candidate's `createdAt` is taken from the clock and moved forward
    /// past any value already in use. `historyUpdated` is signalled only when
    /// the item was stored.
    pub async fn submit(
        &self,
        text: &str,
        source: ItemSource,
    ) -> Result<SubmitOutcome, HistoryStoreError> {
        if text.trim().is_empty() {
            return Ok(SubmitOutcome::Empty);
        }

        let outcome = {
            let _guard = self.write_lock.lock().await;

            let settings = decode_settings(self.get(SETTINGS_KEY).await?).settings;
            let history = self.read_history().await?.items;
            let now = self.clock.now_ms();

            let created_at = next_free_created_at(&history, now);
            let Some(candidate) = ClipboardItem::new(text, source, created_at) else {
                return Ok(SubmitOutcome::Empty);
            };

            let admission = admit(history, candidate.clone(), &settings, now);
            match admission.outcome {
                AdmitOutcome::Duplicate => SubmitOutcome::Duplicate,
                AdmitOutcome::Admitted => {
                    self.write_history(&admission.history).await?;
                    debug!(
                        id = %candidate.id,
                        created_at = candidate.created_at,
                        evicted = admission.report.removed(),
                        "Clipboard item admitted"
                    );
                    SubmitOutcome::Admitted(candidate)
                }
            }
        };

        if outcome.is_admitted() {
            self.signal_history_updated();
        }
        Ok(outcome)
    }

    /// Validate and persist new settings, then re-run retention under them.
    ///
    /// Out-of-range values are rejected before anything is written.
    pub async fn update_settings(
        &self,
        update: SettingsUpdate,
    ) -> Result<Settings, HistoryStoreError> {
        let settings = update.validate()?;

        {
            let _guard = self.write_lock.lock().await;

            self.write_settings(&settings).await?;

            let decoded = self.read_history().await?;
            let repaired = decoded.needs_write_back();
            let (history, report) =
                reapply_settings(decoded.items, &settings, self.clock.now_ms());
            if repaired || !report.is_empty() {
                self.write_history(&history).await?;
                info!(
                    trimmed = report.trimmed,
                    expired = report.expired,
                    "History re-evaluated under new settings"
                );
            }
        }

        self.signal_history_updated();
        Ok(settings)
    }

    /// Flip `pinned` on the first item matching `key`.
    ///
    /// Returns the new pinned state, or `None` when nothing matched.
    pub async fn toggle_pin(&self, key: &ItemKey) -> Result<Option<bool>, HistoryStoreError> {
        let pinned = {
            let _guard = self.write_lock.lock().await;

            let mut history = self.read_history().await?.items;
            let Some(item) = history.iter_mut().find(|item| key.matches(item)) else {
                debug!(%key, "Toggle pin: no matching item");
                return Ok(None);
            };
            item.pinned = !item.pinned;
            let pinned = item.pinned;

            self.write_history(&history).await?;
            pinned
        };

        self.signal_history_updated();
        Ok(Some(pinned))
    }

    /// Remove the first item matching `key`. Returns whether one was removed.
    pub async fn delete(&self, key: &ItemKey) -> Result<bool, HistoryStoreError> {
        {
            let _guard = self.write_lock.lock().await;

            let mut history = self.read_history().await?.items;
            let Some(position) = history.iter().position(|item| key.matches(item)) else {
                debug!(%key, "Delete: no matching item");
                return Ok(false);
            };
            history.remove(position);

            self.write_history(&history).await?;
        }

        self.signal_history_updated();
        Ok(true)
    }

    /// Empty the history, pinned items included. Returns how many were removed.
    pub async fn clear_all(&self) -> Result<usize, HistoryStoreError> {
        let removed = {
            let _guard = self.write_lock.lock().await;

            let removed = match self.read_history().await {
                Ok(decoded) => decoded.items.len(),
                Err(HistoryStoreError::Corrupted(reason)) => {
                    warn!(%reason, "Clearing unreadable history");
                    0
                }
                Err(err) => return Err(err),
            };

            self.write_history(&[]).await?;
            removed
        };

        info!(removed, "History cleared");
        self.signal_history_updated();
        Ok(removed)
    }

    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, HistoryStoreError> {
        self.storage
            .get(key)
            .await
            .with_context(|| format!("read {key} failed"))
            .map_err(HistoryStoreError::Storage)
    }

    async fn read_history(&self) -> Result<DecodedHistory, HistoryStoreError> {
        let value = self.get(HISTORY_KEY).await?;
        Ok(decode_history(value)?)
    }

    async fn write_history(&self, history: &[ClipboardItem]) -> Result<(), HistoryStoreError> {
        let value = encode_history(history)
            .context("encode history failed")
            .map_err(HistoryStoreError::Storage)?;
        self.storage
            .set(HISTORY_KEY, value)
            .await
            .with_context(|| format!("write {HISTORY_KEY} failed"))
            .map_err(HistoryStoreError::Storage)
    }

    async fn write_settings(&self, settings: &Settings) -> Result<(), HistoryStoreError> {
        let value = encode_settings(settings)
            .context("encode settings failed")
            .map_err(HistoryStoreError::Storage)?;
        self.storage
            .set(SETTINGS_KEY, value)
            .await
            .with_context(|| format!("write {SETTINGS_KEY} failed"))
            .map_err(HistoryStoreError::Storage)
    }

    fn signal_history_updated(&self) {
        match self.notifier.notify_history_updated() {
            Ok(()) => {}
            Err(NotificationError::NoListener) => {
                debug!("historyUpdated had no listener");
            }
            Err(err) => {
                warn!(error = %err, "Failed to signal historyUpdated");
            }
        }
    }
}
