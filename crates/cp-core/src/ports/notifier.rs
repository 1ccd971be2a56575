use super::errors::NotificationError;

/// Publishes the `historyUpdated` signal to every other context.
///
/// Delivery is best-effort. Callers log failures and carry on.
pub trait HistoryNotifierPort: Send + Sync {
    fn notify_history_updated(&self) -> Result<(), NotificationError>;
}
