use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{AUTO_CLEANUP_DAYS_RANGE, MAX_ITEMS_RANGE};

/// Persisted settings record (`extensionSettings`).
///
/// Every field falls back to its default when missing, so records written by
/// older versions (without `darkMode`) still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub max_items: u32,
    pub auto_cleanup_days: u32,
    pub dark_mode: bool,
}

impl Settings {
    pub fn cleanup_enabled(&self) -> bool {
        self.auto_cleanup_days > 0
    }

    /// Pull each field back into its allowed range.
    ///
    /// Returns the clamped settings and whether anything changed.
    pub fn clamped(self) -> (Self, bool) {
        let max_items = self
            .max_items
            .clamp(*MAX_ITEMS_RANGE.start(), *MAX_ITEMS_RANGE.end());
        let auto_cleanup_days = self.auto_cleanup_days.clamp(
            *AUTO_CLEANUP_DAYS_RANGE.start(),
            *AUTO_CLEANUP_DAYS_RANGE.end(),
        );
        let clamped = Self {
            max_items,
            auto_cleanup_days,
            dark_mode: self.dark_mode,
        };
        (clamped, clamped != self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("Maximum items must be between 10 and 10,000")]
    MaxItemsOutOfRange { value: i64 },

    #[error("Auto-cleanup days must be between 0 and 365")]
    AutoCleanupDaysOutOfRange { value: i64 },
}

/// Settings as submitted from the panel, before range checks.
///
/// Numbers arrive as whatever the user typed, so they are kept signed and wide
/// until validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub max_items: i64,
    pub auto_cleanup_days: i64,
    #[serde(default)]
    pub dark_mode: bool,
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<Settings, SettingsValidationError> {
        let max_items = u32::try_from(self.max_items)
            .ok()
            .filter(|v| MAX_ITEMS_RANGE.contains(v))
            .ok_or(SettingsValidationError::MaxItemsOutOfRange {
                value: self.max_items,
            })?;

        let auto_cleanup_days = u32::try_from(self.auto_cleanup_days)
            .ok()
            .filter(|v| AUTO_CLEANUP_DAYS_RANGE.contains(v))
            .ok_or(SettingsValidationError::AutoCleanupDaysOutOfRange {
                value: self.auto_cleanup_days,
            })?;

        Ok(Settings {
            max_items,
            auto_cleanup_days,
            dark_mode: self.dark_mode,
        })
    }
}

impl From<Settings> for SettingsUpdate {
    fn from(settings: Settings) -> Self {
        Self {
            max_items: i64::from(settings.max_items),
            auto_cleanup_days: i64::from(settings.auto_cleanup_days),
            dark_mode: settings.dark_mode,
        }
    }
}
