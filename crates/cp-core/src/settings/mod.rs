//! User settings carried alongside the history.
mod defaults;
mod model;

pub use defaults::{
    AUTO_CLEANUP_DAYS_RANGE, DEFAULT_AUTO_CLEANUP_DAYS, DEFAULT_MAX_ITEMS, MAX_ITEMS_RANGE,
};
pub use model::{Settings, SettingsUpdate, SettingsValidationError};
