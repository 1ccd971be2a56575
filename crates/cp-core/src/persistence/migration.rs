//! Load-time repair of persisted history and settings.

use serde_json::Value;
use thiserror::Error;

use super::record::ClipboardItemRecord;
use crate::clipboard::timestamp::{backfill_created_at, format_display};
use crate::clipboard::ClipboardItem;
use crate::ids::ItemId;
use crate::settings::Settings;

#[derive(Debug, Error)]
pub enum HistoryDecodeError {
    #[error("persisted history is not a JSON array (found {found})")]
    NotAnArray { found: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedHistory {
    pub items: Vec<ClipboardItem>,
    /// Records repaired in place (id generated, `createdAt` or `timestamp` filled in).
    pub migrated: usize,
    /// Records that could not be read as an item and were discarded.
    pub dropped: usize,
}

impl DecodedHistory {
    pub fn needs_write_back(&self) -> bool {
        self.migrated > 0 || self.dropped > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSettings {
    pub settings: Settings,
    /// The stored record was absent, partial, malformed or out of range.
    pub needs_write_back: bool,
}

/// Decode the persisted history array, repairing legacy records.
///
/// An absent key is an empty history. Elements that are not objects with a
/// non-empty string `text` are dropped.
pub fn decode_history(value: Option<Value>) -> Result<DecodedHistory, HistoryDecodeError> {
    let elements = match value {
        None | Some(Value::Null) => return Ok(DecodedHistory::default()),
        Some(Value::Array(elements)) => elements,
        Some(other) => {
            return Err(HistoryDecodeError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut decoded = DecodedHistory {
        items: Vec::with_capacity(elements.len()),
        ..DecodedHistory::default()
    };

    for element in elements {
        let record = match serde_json::from_value::<ClipboardItemRecord>(element) {
            Ok(record) if !record.text.trim().is_empty() => record,
            Ok(_) => {
                decoded.dropped += 1;
                continue;
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "dropping unreadable history record");
                decoded.dropped += 1;
                continue;
            }
        };

        let (item, repaired) = repair_record(record);
        if repaired {
            decoded.migrated += 1;
        }
        decoded.items.push(item);
    }

    Ok(decoded)
}

fn repair_record(record: ClipboardItemRecord) -> (ClipboardItem, bool) {
    let mut repaired = false;

    let created_at = match record.numeric_created_at() {
        Some(ms) => ms,
        None => {
            repaired = true;
            record
                .timestamp
                .as_deref()
                .map(backfill_created_at)
                .unwrap_or(0)
        }
    };

    let id = match record.id {
        Some(id) if !id.is_empty() => ItemId::from(id),
        _ => {
            repaired = true;
            ItemId::new()
        }
    };

    let timestamp = match record.timestamp {
        Some(ts) => ts,
        None => {
            repaired = true;
            format_display(created_at)
        }
    };

    let item = ClipboardItem {
        id,
        text: record.text,
        created_at,
        timestamp,
        url: record.url.unwrap_or_default(),
        title: record.title.unwrap_or_default(),
        pinned: record.pinned,
        meta_tags: record.meta_tags.unwrap_or_default(),
    };
    (item, repaired)
}

pub fn encode_history(items: &[ClipboardItem]) -> Result<Value, serde_json::Error> {
    serde_json::to_value(items)
}

/// Decode the settings record, merging stored fields over the defaults.
pub fn decode_settings(value: Option<Value>) -> DecodedSettings {
    let Some(Value::Object(map)) = value else {
        return DecodedSettings {
            settings: Settings::default(),
            needs_write_back: true,
        };
    };

    let complete = ["maxItems", "autoCleanupDays", "darkMode"]
        .iter()
        .all(|key| map.contains_key(*key));

    match serde_json::from_value::<Settings>(Value::Object(map)) {
        Ok(stored) => {
            let (settings, clamped) = stored.clamped();
            DecodedSettings {
                settings,
                needs_write_back: clamped || !complete,
            }
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "stored settings unreadable, using defaults");
            DecodedSettings {
                settings: Settings::default(),
                needs_write_back: true,
            }
        }
    }
}

pub fn encode_settings(settings: &Settings) -> Result<Value, serde_json::Error> {
    serde_json::to_value(settings)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::timestamp::parse_display;
    use serde_json::json;

    #[test]
    fn absent_history_is_empty() {
        let decoded = decode_history(None).unwrap();
        assert!(decoded.items.is_empty());
        assert!(!decoded.needs_write_back());
    }

    #[test]
    fn current_records_decode_without_write_back() {
        let value = json!([{
            "id": "a1",
            "text": "hello",
            "createdAt": 1_700_000_000_000_i64,
            "timestamp": "11/14/2023, 10:13:20 PM",
            "url": "https://example.com/",
            "title": "Example",
            "pinned": true,
            "metaTags": "demo"
        }]);

        let decoded = decode_history(Some(value)).unwrap();

        assert!(!decoded.needs_write_back());
        let item = &decoded.items[0];
        assert_eq!(item.id.as_str(), "a1");
        assert_eq!(item.created_at, 1_700_000_000_000);
        assert!(item.pinned);
        assert_eq!(item.meta_tags, "demo");
    }

    #[test]
    fn missing_created_at_is_backfilled_from_timestamp() {
        let value = json!([
            { "id": "a", "text": "parsed", "timestamp": "1/1/2024, 12:00:00 PM" },
            { "id": "b", "text": "garbage", "timestamp": "not a date" },
            { "id": "c", "text": "string", "createdAt": "soon", "timestamp": "also not a date" }
        ]);

        let decoded = decode_history(Some(value)).unwrap();

        assert_eq!(decoded.migrated, 3);
        assert!(decoded.needs_write_back());
        assert_eq!(
            decoded.items[0].created_at,
            parse_display("1/1/2024, 12:00:00 PM").unwrap()
        );
        assert_eq!(decoded.items[1].created_at, 0);
        assert_eq!(decoded.items[2].created_at, 0);
        // display string is kept as stored
        assert_eq!(decoded.items[1].timestamp, "not a date");
    }

    #[test]
    fn legacy_records_get_ids_and_default_fields() {
        let value = json!([{ "text": "old", "createdAt": 5 }]);

        let decoded = decode_history(Some(value)).unwrap();
        let item = &decoded.items[0];

        assert_eq!(decoded.migrated, 1);
        assert!(!item.id.as_str().is_empty());
        assert_eq!(item.url, "");
        assert!(!item.pinned);
        assert!(!item.timestamp.is_empty());
    }

    #[test]
    fn unreadable_records_are_dropped() {
        let value = json!([
            { "text": "keep", "createdAt": 1, "id": "k", "timestamp": "x" },
            { "createdAt": 2 },
            { "text": "   ", "createdAt": 3 },
            42
        ]);

        let decoded = decode_history(Some(value)).unwrap();

        assert_eq!(decoded.items.len(), 1);
        assert_eq!(decoded.dropped, 3);
        assert!(decoded.needs_write_back());
    }

    #[test]
    fn non_array_history_is_an_error() {
        let err = decode_history(Some(json!({ "text": "x" }))).unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn absent_settings_yield_defaults_and_write_back() {
        let decoded = decode_settings(None);
        assert_eq!(decoded.settings, Settings::default());
        assert!(decoded.needs_write_back);
    }

    #[test]
    fn partial_settings_are_merged_over_defaults() {
        let decoded = decode_settings(Some(json!({ "maxItems": 20, "autoCleanupDays": 3 })));

        assert_eq!(decoded.settings.max_items, 20);
        assert_eq!(decoded.settings.auto_cleanup_days, 3);
        assert!(!decoded.settings.dark_mode);
        assert!(decoded.needs_write_back);
    }

    #[test]
    fn complete_settings_need_no_write_back() {
        let decoded = decode_settings(Some(json!({
            "maxItems": 20, "autoCleanupDays": 3, "darkMode": true
        })));

        assert!(decoded.settings.dark_mode);
        assert!(!decoded.needs_write_back);
    }

    #[test]
    fn malformed_or_out_of_range_settings_are_repaired() {
        let decoded = decode_settings(Some(json!({ "maxItems": "lots" })));
        assert_eq!(decoded.settings, Settings::default());
        assert!(decoded.needs_write_back);

        let decoded = decode_settings(Some(json!({
            "maxItems": 5, "autoCleanupDays": 0, "darkMode": false
        })));
        assert_eq!(decoded.settings.max_items, 10);
        assert!(decoded.needs_write_back);
    }
}
