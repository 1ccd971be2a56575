//! Tracing configuration for Clipo
//!
//! Installs the global subscriber: an env-filter, a console layer and an
//! optional file layer under the configured logs directory.
//!
//! stdout carries the host message protocol, so the console layer writes to
//! stderr.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "clipo.log";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug for everything
/// - **Production**: info for everything
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("cp_core={level}"),
        format!("cp_app={level}"),
        format!("cp_infra={level}"),
    ]
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default directives. When `logs_dir` is given and
/// the file writer cannot be created, logging falls back to the console only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(is_development()).join(","))
    });

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIME_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev = build_filter_directives(true);
        assert!(dev.contains(&"debug".to_string()));
        assert!(dev.contains(&"cp_app=debug".to_string()));

        let prod = build_filter_directives(false);
        assert!(prod.contains(&"info".to_string()));
        assert!(prod.contains(&"cp_infra=info".to_string()));
    }

    #[test]
    fn test_file_writer_creates_logs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        // the guard slot is process-wide; only the directory side effect matters here
        let _ = build_file_writer(&logs);

        assert!(logs.is_dir());
    }
}
