//! Event Forwarding - forward store signals to connected contexts
//! 事件转发 - 将存储信号转发给各个上下文

use cp_infra::HistoryUpdated;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Events pushed to contexts without a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    /// History or settings changed; re-read and re-render.
    HistoryUpdated,
}

impl From<HistoryUpdated> for HostEvent {
    fn from(_: HistoryUpdated) -> Self {
        HostEvent::HistoryUpdated
    }
}

/// Destination for forwarded events.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: &HostEvent) -> anyhow::Result<()>;
}

/// Sends each event as one serialized JSON line.
impl EventSink for mpsc::UnboundedSender<String> {
    fn emit(&self, event: &HostEvent) -> anyhow::Result<()> {
        let line = serde_json::to_string(event)?;
        self.send(line)
            .map_err(|_| anyhow::anyhow!("event output channel closed"))
    }
}

/// Forward every `historyUpdated` signal to `sink` until the channel closes.
///
/// Lagging is harmless: the signal carries no data, so one forwarded event
/// stands in for the missed ones. Sink failures are logged and skipped.
pub fn spawn_event_forwarder<S: EventSink>(
    mut rx: broadcast::Receiver<HistoryUpdated>,
    sink: S,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let event = match rx.recv().await {
                Ok(signal) => HostEvent::from(signal),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event forwarder lagged");
                    HostEvent::HistoryUpdated
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };

            if let Err(err) = sink.emit(&event) {
                warn!(error = %err, "Failed to forward event");
            }
        }
        debug!("Event forwarder stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cp_core::ports::HistoryNotifierPort;
    use cp_infra::BroadcastHistoryNotifier;
    use mockall::mock;

    mock! {
        pub Sink {}

        impl EventSink for Sink {
            fn emit(&self, event: &HostEvent) -> anyhow::Result<()>;
        }
    }

    #[test]
    fn history_updated_serializes_with_type_tag() {
        let value = serde_json::to_value(HostEvent::HistoryUpdated).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "historyUpdated" }));
    }

    #[tokio::test]
    async fn forwarder_writes_json_lines() {
        let notifier = BroadcastHistoryNotifier::new(4);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_event_forwarder(notifier.subscribe(), tx);

        notifier.notify_history_updated().unwrap();

        assert_eq!(rx.recv().await.unwrap(), r#"{"type":"historyUpdated"}"#);

        drop(notifier);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn sink_failures_do_not_stop_forwarding() {
        let mut sink = MockSink::new();
        sink.expect_emit()
            .times(2)
            .returning(|_| Err(anyhow::anyhow!("window closed")));

        let notifier = BroadcastHistoryNotifier::new(4);
        let handle = spawn_event_forwarder(notifier.subscribe(), sink);

        notifier.notify_history_updated().unwrap();
        notifier.notify_history_updated().unwrap();
        drop(notifier);

        handle.await.unwrap();
    }
}
