//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for store construction. Not a builder: no defaults,
//! no build steps, every port is required.
//! 仅用于参数打包，所有依赖都是必需的。

use std::sync::Arc;

use cp_core::ports::{ClockPort, HistoryNotifierPort, StateStoragePort};

/// Application dependency grouping (just parameter grouping)
/// 应用依赖分组（仅参数打包）
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub storage: Arc<dyn StateStoragePort>,

    // Notification dependencies / 通知依赖
    pub notifier: Arc<dyn HistoryNotifierPort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}
