//! Read-side projections used by the panel.
//!
//! Filtering and display ordering are computed fresh for every render and are
//! never written back to storage.

use serde::Serialize;
use url::Url;

use super::item::{ClipboardItem, MANUAL_URL};
use crate::ids::ItemId;

/// Characters shown before a long text is cut off in the list.
pub const PREVIEW_CHARS: usize = 200;

/// Leading characters inspected for right-to-left script.
const RTL_PROBE_CHARS: usize = 10;

/// Case-insensitive substring filter over text, title, url and meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    needle: String,
}

impl HistoryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, item: &ClipboardItem) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        [&item.text, &item.title, &item.url, &item.meta_tags]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Display order: pinned first, then newest first within each group.
///
/// The sort is stable, so items sharing a `createdAt` keep their storage order.
pub fn display_order<'a, I>(items: I) -> Vec<&'a ClipboardItem>
where
    I: IntoIterator<Item = &'a ClipboardItem>,
{
    let mut ordered: Vec<&ClipboardItem> = items.into_iter().collect();
    ordered.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    ordered
}

/// `"1 item"` / `"N items"`.
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// One row of the history list as the panel renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardItemView {
    pub id: ItemId,
    pub created_at: i64,
    pub text: String,
    pub preview: String,
    pub timestamp: String,
    pub source: String,
    pub url: String,
    pub pinned: bool,
    pub is_rtl: bool,
}

impl From<&ClipboardItem> for ClipboardItemView {
    fn from(item: &ClipboardItem) -> Self {
        Self {
            id: item.id.clone(),
            created_at: item.created_at,
            text: item.text.clone(),
            preview: preview_text(&item.text),
            timestamp: item.timestamp.clone(),
            source: source_label(&item.url),
            url: item.url.clone(),
            pinned: item.pinned,
            is_rtl: is_rtl(&item.text),
        }
    }
}

/// First [`PREVIEW_CHARS`] characters, with `...` appended when cut.
pub fn preview_text(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Short label for where an item came from.
pub fn source_label(url: &str) -> String {
    if url == MANUAL_URL {
        return "Manual".to_string();
    }

    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_) => "Unknown".to_string(),
    }
}

/// Whether the text opens with Hebrew or Arabic-script characters.
pub fn is_rtl(text: &str) -> bool {
    text.chars().take(RTL_PROBE_CHARS).any(|c| {
        matches!(c,
            '\u{0590}'..='\u{05FF}'
            | '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ItemSource;

    fn item(text: &str, created_at: i64, pinned: bool) -> ClipboardItem {
        let mut item = ClipboardItem::new(
            text,
            ItemSource::Capture {
                url: "https://docs.rs/serde".to_string(),
                title: "Serde docs".to_string(),
                meta_tags: "serialization framework".to_string(),
            },
            created_at,
        )
        .unwrap();
        item.pinned = pinned;
        item
    }

    #[test]
    fn filter_is_case_insensitive_across_fields() {
        let entry = item("Hello World", 1, false);

        assert!(HistoryFilter::new("hello").matches(&entry));
        assert!(HistoryFilter::new("SERDE DOCS").matches(&entry));
        assert!(HistoryFilter::new("docs.rs").matches(&entry));
        assert!(HistoryFilter::new("framework").matches(&entry));
        assert!(!HistoryFilter::new("tokio").matches(&entry));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = HistoryFilter::new("");
        assert!(filter.is_empty());
        assert!(filter.matches(&item("anything", 1, false)));
    }

    #[test]
    fn display_order_puts_pinned_first_then_newest() {
        let items = vec![
            item("old", 10, false),
            item("pinned-old", 5, true),
            item("new", 30, false),
            item("pinned-new", 20, true),
        ];

        let texts: Vec<&str> = display_order(&items)
            .into_iter()
            .map(|i| i.text.as_str())
            .collect();

        assert_eq!(texts, vec!["pinned-new", "pinned-old", "new", "old"]);
        // storage order untouched
        assert_eq!(items[0].text, "old");
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "a".repeat(250);
        let preview = preview_text(&long);

        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(preview_text("short"), "short");
        assert_eq!(preview_text(&"é".repeat(PREVIEW_CHARS)), "é".repeat(PREVIEW_CHARS));
    }

    #[test]
    fn source_label_covers_manual_hosts_and_garbage() {
        assert_eq!(source_label("manual"), "Manual");
        assert_eq!(source_label("https://github.com/rust-lang"), "github.com");
        assert_eq!(source_label("not a url"), "Unknown");
    }

    #[test]
    fn rtl_detection_looks_at_leading_characters() {
        assert!(is_rtl("שלום עולם"));
        assert!(is_rtl("مرحبا"));
        assert!(!is_rtl("hello"));
        assert!(!is_rtl(&format!("{}שלום", "x".repeat(12))));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(5), "5 items");
    }

    #[test]
    fn view_projects_display_fields() {
        let view = ClipboardItemView::from(&item("hello", 1, true));

        assert_eq!(view.source, "docs.rs");
        assert_eq!(view.preview, "hello");
        assert!(view.pinned);
        assert!(!view.is_rtl);
    }
}
