use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "Clipo";

/// Get the Clipo application data root directory.
///
/// 获取 Clipo 应用数据根目录。
///
/// # Platform-specific Paths / 平台特定路径
/// - macOS: ~/Library/Application Support/Clipo
/// - Windows: %APPDATA%\Clipo
/// - Linux: $XDG_DATA_HOME/Clipo or ~/.local/share/Clipo
///
/// The directory is not created here.
/// 此函数不自动创建目录。
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}

fn platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // 优先使用 XDG_DATA_HOME，如果不存在则使用 ~/.local/share
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            if !xdg_data_home.is_empty() {
                return Ok(PathBuf::from(xdg_data_home));
            }
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}
