//! Key-value state storage adapters.
mod json_file;
mod memory;

pub use json_file::JsonFileStateStorage;
pub use memory::InMemoryStateStorage;
