//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping. No validation
//! and no default calculation happens here; the host resolves empty values.
//!
//! 此模块只包含数据结构定义，不做验证，也不计算默认值。

use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// State file holding history and settings (may be empty - a fact, not an error)
    /// 历史与设置的状态文件路径（可能为空）
    pub state_path: PathBuf,

    /// Directory for rolling log files (may be empty)
    pub logs_dir: PathBuf,

    /// Capacity of the `historyUpdated` broadcast channel (0 when unset)
    pub event_channel_capacity: usize,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Missing keys become empty values. Nothing is checked here.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            state_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("state_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            logs_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("logs_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            event_channel_capacity: toml_value
                .get("events")
                .and_then(|e| e.get("channel_capacity"))
                .and_then(|v| v.as_integer())
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(0),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            state_path: PathBuf::new(),
            logs_dir: PathBuf::new(),
            event_channel_capacity: 0,
        }
    }

    /// Create AppConfig with system-default paths under `data_dir`
    /// 生产环境使用：基于 `data_dir` 构建默认路径
    ///
    /// `data_dir` is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: &Path) -> Self {
        let dirs = AppDirs {
            app_data_root: data_dir.to_path_buf(),
        };
        Self {
            state_path: dirs.state_file(),
            logs_dir: dirs.logs_dir(),
            event_channel_capacity: 64,
        }
    }
}
