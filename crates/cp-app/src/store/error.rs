use cp_core::persistence::HistoryDecodeError;
use cp_core::SettingsValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryStoreError {
    /// Submitted settings were out of range. Nothing was written.
    #[error(transparent)]
    Validation(#[from] SettingsValidationError),

    /// Reading or writing the storage substrate failed. The write did not happen.
    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),

    /// The persisted history could not be decoded at all.
    #[error("persisted history is corrupted: {0}")]
    Corrupted(String),
}

impl From<HistoryDecodeError> for HistoryStoreError {
    fn from(err: HistoryDecodeError) -> Self {
        HistoryStoreError::Corrupted(err.to_string())
    }
}

impl HistoryStoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, HistoryStoreError::Validation(_))
    }
}
