//! Per-user application directories and the file layout beneath them.

use std::path::PathBuf;

const STATE_FILE_NAME: &str = "state.json";
const LOGS_DIR_NAME: &str = "logs";

/// Resolved per-user application directories.
///
/// 已解析的用户级应用目录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// JSON state file holding history and settings.
    pub fn state_file(&self) -> PathBuf {
        self.app_data_root.join(STATE_FILE_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join(LOGS_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_lives_under_the_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/data/Clipo"),
        };

        assert_eq!(dirs.state_file(), PathBuf::from("/data/Clipo/state.json"));
        assert_eq!(dirs.logs_dir(), PathBuf::from("/data/Clipo/logs"));
    }
}
