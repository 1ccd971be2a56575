//! The single owner of persisted history and settings.
mod error;
mod history_store;

pub use error::HistoryStoreError;
pub use history_store::{HistoryStore, LoadedState, SubmitOutcome};
