use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data directory is not available on this platform")]
    DataDirUnavailable,
}

/// Why a `historyUpdated` signal did not reach anyone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("no listener is subscribed to history updates")]
    NoListener,

    #[error("notification channel is closed")]
    ChannelClosed,
}
