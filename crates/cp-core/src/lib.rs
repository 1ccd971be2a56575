//! # cp-core
//!
//! Core domain models and retention policy for Clipo.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard item model, settings, the retention engine (dedupe, capacity trim,
//! auto-cleanup), persisted record mapping and the ports implemented by the outer layers.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ids;
pub mod persistence;
pub mod ports;
pub mod retention;
pub mod settings;

// Re-export commonly used types at the crate root
pub use clipboard::{CapturedText, ClipboardItem, ItemKey, ItemSource};
pub use config::AppConfig;
pub use ids::ItemId;
pub use retention::{AdmitOutcome, Admission, RetentionReport};
pub use settings::{Settings, SettingsUpdate, SettingsValidationError};
