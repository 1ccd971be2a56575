use std::sync::Arc;

use cp_app::SubmitOutcome;
use serde::Serialize;
use serde_json::Value;
use tracing::{info_span, warn, Instrument};

use super::error::map_err;
use super::messages::{HostMessage, HostResponse, SavePayload};
use crate::bootstrap::AppRuntime;

/// Dispatches [`HostMessage`]s to use cases and shapes the replies.
#[derive(Clone)]
pub struct MessageRouter {
    runtime: Arc<AppRuntime>,
}

impl MessageRouter {
    pub fn new(runtime: Arc<AppRuntime>) -> Self {
        Self { runtime }
    }

    /// Decode one raw JSON message and handle it.
    ///
    /// Undecodable input gets a failed response rather than an error.
    pub async fn handle_json(&self, raw: &str) -> HostResponse {
        match serde_json::from_str::<HostMessage>(raw) {
            Ok(message) => self.handle(message).await,
            Err(err) => {
                warn!(error = %err, "Rejecting undecodable message");
                HostResponse::failed(format!("invalid message: {err}"))
            }
        }
    }

    pub async fn handle(&self, message: HostMessage) -> HostResponse {
        let span = info_span!("command.handle", kind = message_kind(&message));

        async {
            let usecases = self.runtime.usecases();
            match message {
                HostMessage::SaveClipboardItem { payload } => self.save_captured(payload).await,
                HostMessage::AddManualItem { text } => {
                    submit_response(usecases.add_manual_item().execute(&text).await)
                }
                HostMessage::SettingsUpdated { settings } => {
                    match usecases.update_settings().execute(settings).await {
                        Ok(saved) => data_response(&saved),
                        Err(err) => HostResponse::failed(map_err(err)),
                    }
                }
                HostMessage::LoadHistory => match usecases.load_history().execute().await {
                    Ok(state) => data_response(&serde_json::json!({
                        "history": state.history,
                        "settings": state.settings,
                    })),
                    Err(err) => HostResponse::failed(map_err(err)),
                },
                HostMessage::SearchHistory { query } => {
                    match usecases.search_history().execute(&query).await {
                        Ok(results) => data_response(&results),
                        Err(err) => HostResponse::failed(map_err(err)),
                    }
                }
                HostMessage::TogglePin { key } => {
                    match usecases.toggle_pin().execute(&key).await {
                        Ok(Some(pinned)) => HostResponse::ok_with(Value::Bool(pinned)),
                        Ok(None) => HostResponse::rejected("not_found"),
                        Err(err) => HostResponse::failed(map_err(err)),
                    }
                }
                HostMessage::DeleteItem { key } => {
                    match usecases.delete_clipboard_item().execute(&key).await {
                        Ok(true) => HostResponse::ok(),
                        Ok(false) => HostResponse::rejected("not_found"),
                        Err(err) => HostResponse::failed(map_err(err)),
                    }
                }
                HostMessage::ClearHistory { confirmed: false } => {
                    HostResponse::rejected("not_confirmed")
                }
                HostMessage::ClearHistory { confirmed: true } => {
                    match usecases.clear_history().execute().await {
                        Ok(removed) => HostResponse::ok_with(Value::from(removed)),
                        Err(err) => HostResponse::failed(map_err(err)),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn save_captured(&self, payload: SavePayload) -> HostResponse {
        let guard = self.runtime.capture_guard();
        let surface = payload.surface().to_string();
        let text = payload.captured.text.clone();

        if !guard.should_forward(&surface, &text) {
            return HostResponse::rejected(if text.trim().is_empty() {
                "empty"
            } else {
                "duplicate"
            });
        }

        let outcome = self
            .runtime
            .usecases()
            .submit_clipboard_item()
            .execute(payload.captured)
            .await;
        // a failed write leaves the surface as it was so the copy can be retried
        if let Ok(SubmitOutcome::Admitted(_) | SubmitOutcome::Duplicate) = &outcome {
            guard.commit(&surface, &text);
        }
        submit_response(outcome)
    }
}

fn submit_response(outcome: anyhow::Result<SubmitOutcome>) -> HostResponse {
    match outcome {
        Ok(SubmitOutcome::Admitted(item)) => data_response(&item),
        Ok(other) => HostResponse::rejected(other.reason().unwrap_or("rejected")),
        Err(err) => HostResponse::failed(map_err(err)),
    }
}

fn data_response<T: Serialize>(data: &T) -> HostResponse {
    match serde_json::to_value(data) {
        Ok(value) => HostResponse::ok_with(value),
        Err(err) => HostResponse::failed(format!("encode response failed: {err}")),
    }
}

fn message_kind(message: &HostMessage) -> &'static str {
    match message {
        HostMessage::SaveClipboardItem { .. } => "saveClipboardItem",
        HostMessage::AddManualItem { .. } => "addManualItem",
        HostMessage::SettingsUpdated { .. } => "settingsUpdated",
        HostMessage::LoadHistory => "loadHistory",
        HostMessage::SearchHistory { .. } => "searchHistory",
        HostMessage::TogglePin { .. } => "togglePin",
        HostMessage::DeleteItem { .. } => "deleteItem",
        HostMessage::ClearHistory { .. } => "clearHistory",
    }
}
