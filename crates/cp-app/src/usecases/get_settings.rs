//! Use case for getting the current settings
//! 获取当前设置的用例

use std::sync::Arc;

use anyhow::Result;
use cp_core::Settings;
use tracing::{info, info_span, Instrument};

use crate::store::HistoryStore;

pub struct GetSettings {
    store: Arc<HistoryStore>,
}

impl GetSettings {
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    /// # Returns / 返回值
    /// - `Ok(Settings)` - stored settings merged over defaults
    /// - `Err(e)` if reading storage fails
    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.get_settings.execute");

        async {
            let settings = self.store.current_settings().await?;
            info!("Settings retrieved successfully");
            Ok(settings)
        }
        .instrument(span)
        .await
    }
}
