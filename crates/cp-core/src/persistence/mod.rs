//! Mapping between the persisted key-value layout and domain types.
mod keys;
mod migration;
mod record;

pub use keys::{HISTORY_KEY, SETTINGS_KEY};
pub use migration::{
    decode_history, decode_settings, encode_history, encode_settings, DecodedHistory,
    DecodedSettings, HistoryDecodeError,
};
pub use record::ClipboardItemRecord;
