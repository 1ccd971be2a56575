//! Clipo Application Layer
//!
//! The history store that serializes every read-modify-write against the
//! persisted state, and the use cases the host calls into.

pub mod capture;
pub mod deps;
pub mod store;
pub mod usecases;

pub use capture::CaptureGuard;
pub use deps::AppDeps;
pub use store::{HistoryStore, HistoryStoreError, LoadedState, SubmitOutcome};
