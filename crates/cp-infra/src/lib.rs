//! Infrastructure adapters for the cp-core ports.
pub mod events;
pub mod fs;
pub mod storage;
pub mod time;

pub use events::{BroadcastHistoryNotifier, HistoryUpdated};
pub use storage::{InMemoryStateStorage, JsonFileStateStorage};
pub use time::SystemClock;
