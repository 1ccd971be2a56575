use std::path::PathBuf;

use cp_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

use super::app_data_dir::{app_data_dir, APP_DIR_NAME};

/// Resolves [`AppDirs`] from the platform data directory.
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_data_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `base` instead of the platform data directory.
    pub fn with_base_data_dir(base: PathBuf) -> Self {
        Self {
            base_data_dir_override: Some(base),
        }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let app_data_root = match &self.base_data_dir_override {
            Some(base) => base.join(APP_DIR_NAME),
            None => app_data_dir().map_err(|err| {
                tracing::warn!(error = %err, "Platform data directory unavailable");
                AppDirsError::DataDirUnavailable
            })?,
        };

        Ok(AppDirs { app_data_root })
    }
}
