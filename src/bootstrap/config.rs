//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it to the [`AppConfig`] DTO. Empty values are
//! accepted as facts here; [`super::wiring::resolve_config`] fills them in.
//!
//! 仅纯数据加载。接受文件中的任何内容。

use anyhow::Context;
use cp_core::config::AppConfig;
use std::path::Path;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
