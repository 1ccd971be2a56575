//! Host entry point.
//!
//! Speaks newline-delimited JSON on stdin/stdout: each input line is a
//! [`HostMessage`](crate::commands::HostMessage), each reply a
//! [`HostResponse`](crate::commands::HostResponse) line. `historyUpdated`
//! events are interleaved on the same output as they happen.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cp_core::config::AppConfig;
use cp_core::ports::AppDirsPort;
use cp_infra::fs::DirsAppDirsAdapter;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::config::load_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_config, wire_dependencies};
use crate::commands::MessageRouter;
use crate::events::spawn_event_forwarder;

/// Run the host until stdin closes.
pub async fn run_host(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let raw_config = match config_path {
        Some(path) => load_config(&path)?,
        None => AppConfig::empty(),
    };
    let config = resolve_config(raw_config, &app_dirs.app_data_root);

    if let Err(err) = init_tracing_subscriber(Some(&config.logs_dir)) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let runtime = Arc::new(wire_dependencies(config));
    let router = MessageRouter::new(Arc::clone(&runtime));

    // repairs legacy state and applies auto-cleanup before the first message
    if let Err(err) = runtime.usecases().load_history().execute().await {
        error!(error = %err, "Initial history load failed");
    }

    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();
    let forwarder = spawn_event_forwarder(runtime.subscribe(), out_tx.clone());

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = out_rx.recv().await {
            if let Err(err) = write_line(&mut stdout, &line).await {
                warn!(error = %err, "Failed to write to stdout");
                break;
            }
        }
    });

    info!("Clipo host ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read stdin failed")? {
        if line.trim().is_empty() {
            continue;
        }

        let response = router.handle_json(&line).await;
        let encoded = serde_json::to_string(&response).context("encode response failed")?;
        if out_tx.send(encoded).is_err() {
            break;
        }
    }

    info!("stdin closed, shutting down");
    forwarder.abort();
    drop(out_tx);
    drop(router);
    let _ = writer.await;
    Ok(())
}

async fn write_line(stdout: &mut tokio::io::Stdout, line: &str) -> std::io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
