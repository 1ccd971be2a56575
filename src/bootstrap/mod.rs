pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{build_runtime, resolve_config, wire_dependencies};
