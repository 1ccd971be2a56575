//! Port interfaces for the application layer
//!
//! Ports define the contract between the history store / use cases and the
//! infrastructure that backs them. The store only ever talks to storage,
//! notification and time through these traits.

pub mod app_dirs;
mod clock;
pub mod errors;
mod notifier;
mod storage;

pub use app_dirs::AppDirsPort;
pub use clock::ClockPort;
pub use errors::{AppDirsError, NotificationError};
pub use notifier::HistoryNotifierPort;
pub use storage::StateStoragePort;
