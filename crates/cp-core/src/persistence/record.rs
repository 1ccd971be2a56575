use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A clipboard item exactly as found in storage.
///
/// Records written by older versions may lack `id`, carry `createdAt` as
/// something other than a number, or have no `createdAt` at all, so every
/// field except `text` is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub meta_tags: Option<String>,
}

impl ClipboardItemRecord {
    /// `createdAt` when it is stored as a usable number.
    pub fn numeric_created_at(&self) -> Option<i64> {
        match self.created_at.as_ref()? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
            _ => None,
        }
    }
}
