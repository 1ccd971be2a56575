//! # Dependency Wiring / 依赖注入
//!
//! The only place that knows which adapter backs which port.
//! 唯一知道具体适配器实现的位置。

use std::path::Path;
use std::sync::Arc;

use cp_app::{AppDeps, HistoryStore};
use cp_core::config::AppConfig;
use cp_core::ports::{ClockPort, StateStoragePort};
use cp_infra::{BroadcastHistoryNotifier, JsonFileStateStorage, SystemClock};
use tracing::info;

use super::runtime::AppRuntime;

/// Fill empty configuration facts with the defaults under `data_dir`.
pub fn resolve_config(config: AppConfig, data_dir: &Path) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(data_dir);

    AppConfig {
        state_path: if config.state_path.as_os_str().is_empty() {
            defaults.state_path
        } else {
            config.state_path
        },
        logs_dir: if config.logs_dir.as_os_str().is_empty() {
            defaults.logs_dir
        } else {
            config.logs_dir
        },
        event_channel_capacity: if config.event_channel_capacity == 0 {
            defaults.event_channel_capacity
        } else {
            config.event_channel_capacity
        },
    }
}

/// Build a runtime over the given storage and clock.
pub fn build_runtime(
    config: AppConfig,
    storage: Arc<dyn StateStoragePort>,
    clock: Arc<dyn ClockPort>,
) -> AppRuntime {
    let notifier = BroadcastHistoryNotifier::new(config.event_channel_capacity);

    let deps = AppDeps {
        storage,
        notifier: Arc::new(notifier.clone()),
        clock,
    };
    let store = Arc::new(HistoryStore::from_deps(deps));

    AppRuntime::new(config, store, notifier)
}

/// Wire production adapters: JSON state file, system clock, broadcast notifier.
pub fn wire_dependencies(config: AppConfig) -> AppRuntime {
    info!(
        state_path = %config.state_path.display(),
        channel_capacity = config.event_channel_capacity,
        "Wiring dependencies"
    );

    let storage = Arc::new(JsonFileStateStorage::new(config.state_path.clone()));
    build_runtime(config, storage, Arc::new(SystemClock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn resolve_config_fills_only_empty_values() {
        let config = AppConfig {
            state_path: PathBuf::from("/custom/state.json"),
            logs_dir: PathBuf::new(),
            event_channel_capacity: 0,
        };

        let resolved = resolve_config(config, Path::new("/data/Clipo"));

        assert_eq!(resolved.state_path, PathBuf::from("/custom/state.json"));
        assert_eq!(resolved.logs_dir, PathBuf::from("/data/Clipo/logs"));
        assert_eq!(resolved.event_channel_capacity, 64);
    }

    #[test]
    fn resolve_config_of_empty_config_is_system_defaults() {
        let data_dir = Path::new("/data/Clipo");
        assert_eq!(
            resolve_config(AppConfig::empty(), data_dir),
            AppConfig::with_system_defaults(data_dir)
        );
    }
}
