use std::ops::RangeInclusive;

use super::model::Settings;

pub const DEFAULT_MAX_ITEMS: u32 = 1000;
pub const DEFAULT_AUTO_CLEANUP_DAYS: u32 = 0;

pub const MAX_ITEMS_RANGE: RangeInclusive<u32> = 10..=10_000;
pub const AUTO_CLEANUP_DAYS_RANGE: RangeInclusive<u32> = 0..=365;

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            auto_cleanup_days: DEFAULT_AUTO_CLEANUP_DAYS,
            dark_mode: false,
        }
    }
}
