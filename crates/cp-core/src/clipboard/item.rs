use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::ids::ItemId;

/// Sentinel `url` for entries typed by the user in the panel.
pub const MANUAL_URL: &str = "manual";

/// Fixed `title` for manual entries.
pub const MANUAL_TITLE: &str = "Manual Entry";

/// Where a candidate item comes from.
///
/// 候选条目的来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// A copy action observed on a web page.
    Capture {
        url: String,
        title: String,
        meta_tags: String,
    },
    /// Text typed into the panel search box and saved.
    Manual,
}

/// Raw text handed over by the capture collaborator on a copy action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedText {
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_tags: String,
}

impl CapturedText {
    pub fn into_parts(self) -> (String, ItemSource) {
        (
            self.text,
            ItemSource::Capture {
                url: self.url,
                title: self.title,
                meta_tags: self.meta_tags,
            },
        )
    }
}

/// A single clipboard history entry.
///
/// 剪贴板历史条目。
///
/// Serialized with the persisted field names (`createdAt`, `metaTags`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItem {
    pub id: ItemId,
    pub text: String,
    pub created_at: i64,
    pub timestamp: String,
    pub url: String,
    pub title: String,
    pub pinned: bool,
    pub meta_tags: String,
}

impl ClipboardItem {
    /// Build a candidate item stamped with `created_at_ms`.
    ///
    /// Returns `None` when the text is empty after trimming; such candidates
    /// are dropped without surfacing an error.
    pub fn new(text: &str, source: ItemSource, created_at_ms: i64) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (url, title, meta_tags) = match source {
            ItemSource::Capture {
                url,
                title,
                meta_tags,
            } => (url, title, meta_tags),
            ItemSource::Manual => (
                MANUAL_URL.to_string(),
                MANUAL_TITLE.to_string(),
                String::new(),
            ),
        };

        Some(Self {
            id: ItemId::new(),
            text: text.to_string(),
            created_at: created_at_ms,
            timestamp: timestamp::format_display(created_at_ms),
            url,
            title,
            pinned: false,
            meta_tags,
        })
    }

    pub fn is_manual(&self) -> bool {
        self.url == MANUAL_URL
    }
}

/// Key used by the presentation layer to address an item.
///
/// The panel historically addressed items by `createdAt`; newer callers use the
/// item id. A JSON number decodes as `CreatedAt`, a string as `Id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    CreatedAt(i64),
    Id(ItemId),
}

impl ItemKey {
    pub fn matches(&self, item: &ClipboardItem) -> bool {
        match self {
            ItemKey::CreatedAt(ms) => item.created_at == *ms,
            ItemKey::Id(id) => &item.id == id,
        }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKey::CreatedAt(ms) => write!(f, "createdAt:{ms}"),
            ItemKey::Id(id) => write!(f, "id:{id}"),
        }
    }
}

/// Smallest `createdAt >= desired` not used by any item in `history`.
pub fn next_free_created_at(history: &[ClipboardItem], desired: i64) -> i64 {
    let taken: HashSet<i64> = history.iter().map(|item| item.created_at).collect();
    let mut candidate = desired;
    while taken.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(url: &str) -> ItemSource {
        ItemSource::Capture {
            url: url.to_string(),
            title: "Example".to_string(),
            meta_tags: "docs rust".to_string(),
        }
    }

    #[test]
    fn new_trims_text_and_keeps_capture_fields() {
        let item = ClipboardItem::new("  hello world \n", capture("https://example.com"), 42)
            .expect("non-empty text");

        assert_eq!(item.text, "hello world");
        assert_eq!(item.created_at, 42);
        assert_eq!(item.url, "https://example.com");
        assert_eq!(item.title, "Example");
        assert_eq!(item.meta_tags, "docs rust");
        assert!(!item.pinned);
        assert!(!item.timestamp.is_empty());
    }

    #[test]
    fn new_rejects_blank_text() {
        assert!(ClipboardItem::new("   \t\n", ItemSource::Manual, 1).is_none());
        assert!(ClipboardItem::new("", capture("https://example.com"), 1).is_none());
    }

    #[test]
    fn manual_items_use_fixed_source_fields() {
        let item = ClipboardItem::new("note", ItemSource::Manual, 7).unwrap();

        assert_eq!(item.url, MANUAL_URL);
        assert_eq!(item.title, MANUAL_TITLE);
        assert_eq!(item.meta_tags, "");
        assert!(item.is_manual());
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let item = ClipboardItem::new("note", ItemSource::Manual, 7).unwrap();
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["createdAt"], 7);
        assert_eq!(value["metaTags"], "");
        assert_eq!(value["pinned"], false);
        assert!(value["id"].is_string());
    }

    #[test]
    fn item_key_decodes_numbers_and_strings() {
        let by_time: ItemKey = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(by_time, ItemKey::CreatedAt(1_700_000_000_000));

        let by_id: ItemKey = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(by_id, ItemKey::Id(ItemId::from("abc")));
    }

    #[test]
    fn next_free_created_at_skips_taken_values() {
        let history: Vec<ClipboardItem> = [100, 101, 103]
            .into_iter()
            .map(|ms| ClipboardItem::new("x", ItemSource::Manual, ms).unwrap())
            .collect();

        assert_eq!(next_free_created_at(&history, 100), 102);
        assert_eq!(next_free_created_at(&history, 99), 99);
        assert_eq!(next_free_created_at(&[], 5), 5);
    }
}
