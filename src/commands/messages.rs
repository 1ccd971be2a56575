//! Wire shapes exchanged with the capture and panel contexts.

use cp_core::{CapturedText, ItemKey, SettingsUpdate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Incoming message, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostMessage {
    /// Text copied on a page.
    SaveClipboardItem { payload: SavePayload },
    /// Search box contents saved as a manual entry.
    AddManualItem { text: String },
    /// Settings form submitted.
    SettingsUpdated { settings: SettingsUpdate },
    LoadHistory,
    SearchHistory {
        #[serde(default)]
        query: String,
    },
    TogglePin { key: ItemKey },
    DeleteItem { key: ItemKey },
    /// Wipe everything, pinned included. Refused unless `confirmed` is true.
    ClearHistory {
        #[serde(default)]
        confirmed: bool,
    },
}

/// `saveClipboardItem` payload.
///
/// Extra fields sent by older capture scripts (`timestamp`, `createdAt`,
/// `pinned`) are ignored; the store assigns those itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    #[serde(flatten)]
    pub captured: CapturedText,
    /// Capture surface (tab/frame) the copy happened on.
    ///
    /// Optional for older capture scripts. Without it the page `url` stands
    /// in as the surface, so tabs open on the same URL share one suppression
    /// memory, and payloads with no URL all share the empty surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_id: Option<String>,
}

impl SavePayload {
    /// `surfaceId` when supplied, the page `url` otherwise.
    pub fn surface(&self) -> &str {
        self.surface_id.as_deref().unwrap_or(&self.captured.url)
    }
}

/// Reply to every [`HostMessage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl HostResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            reason: None,
            error: None,
            data: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    /// A normal refusal such as a duplicate; not an error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            reason: Some(reason.into()),
            ..Self::ok()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::ok()
        }
    }
}
