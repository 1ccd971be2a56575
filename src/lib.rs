//! Clipo host shell
//!
//! Loads configuration, installs tracing, wires the history store to its
//! adapters and routes messages from the capture and panel contexts.

pub mod bootstrap;
pub mod commands;
pub mod events;

pub use bootstrap::run::run_host;
