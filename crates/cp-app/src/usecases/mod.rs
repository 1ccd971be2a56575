//! Business logic use cases
//! 业务用例
//!
//! [capture context]            [panel context]
//!        ↓                            ↓
//! SubmitClipboardItem     LoadHistory / SearchHistory
//!        ↓                AddManualItem / TogglePin
//!   HistoryStore  ←────── DeleteClipboardItem / ClearHistory
//!                         GetSettings / UpdateSettings

pub mod add_manual_item;
pub mod clear_history;
pub mod delete_clipboard_item;
pub mod get_settings;
pub mod load_history;
pub mod search_history;
pub mod submit_clipboard_item;
pub mod toggle_pin;
pub mod update_settings;

pub use add_manual_item::AddManualItem;
pub use clear_history::ClearHistory;
pub use delete_clipboard_item::DeleteClipboardItem;
pub use get_settings::GetSettings;
pub use load_history::LoadHistory;
pub use search_history::{SearchHistory, SearchResults};
pub use submit_clipboard_item::SubmitClipboardItem;
pub use toggle_pin::TogglePin;
pub use update_settings::UpdateSettings;
