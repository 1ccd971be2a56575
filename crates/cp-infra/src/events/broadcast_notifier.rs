use cp_core::ports::{HistoryNotifierPort, NotificationError};
use tokio::sync::broadcast;

/// Payload-free `historyUpdated` signal. Receivers re-read the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryUpdated;

/// Fans `historyUpdated` out to every subscribed context over a tokio broadcast channel.
///
/// Slow receivers may observe `Lagged`; since the signal carries no data, one
/// re-read covers any number of missed signals.
#[derive(Debug, Clone)]
pub struct BroadcastHistoryNotifier {
    sender: broadcast::Sender<HistoryUpdated>,
}

impl BroadcastHistoryNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HistoryUpdated> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl HistoryNotifierPort for BroadcastHistoryNotifier {
    fn notify_history_updated(&self) -> Result<(), NotificationError> {
        self.sender
            .send(HistoryUpdated)
            .map(|delivered| {
                tracing::trace!(delivered, "historyUpdated published");
            })
            .map_err(|_| NotificationError::NoListener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_signal() {
        let notifier = BroadcastHistoryNotifier::new(8);
        let mut panel = notifier.subscribe();
        let mut capture = notifier.subscribe();

        notifier.notify_history_updated().unwrap();

        assert_eq!(panel.recv().await.unwrap(), HistoryUpdated);
        assert_eq!(capture.recv().await.unwrap(), HistoryUpdated);
    }

    #[test]
    fn without_subscribers_reports_no_listener() {
        let notifier = BroadcastHistoryNotifier::new(8);

        assert_eq!(
            notifier.notify_history_updated(),
            Err(NotificationError::NoListener)
        );
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let notifier = BroadcastHistoryNotifier::new(0);
        let _rx = notifier.subscribe();
        assert!(notifier.notify_history_updated().is_ok());
        assert_eq!(notifier.receiver_count(), 1);
    }
}
