//! Clipboard domain models.
mod item;
mod meta;
pub mod timestamp;
pub mod view;

pub use item::{
    next_free_created_at, CapturedText, ClipboardItem, ItemKey, ItemSource, MANUAL_TITLE,
    MANUAL_URL,
};
pub use meta::compose_meta_tags;
pub use view::{display_order, item_count_label, ClipboardItemView, HistoryFilter};
