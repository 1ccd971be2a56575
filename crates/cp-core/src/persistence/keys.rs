/// Key holding the JSON array of clipboard items.
pub const HISTORY_KEY: &str = "clipboardHistory";

/// Key holding the settings record.
pub const SETTINGS_KEY: &str = "extensionSettings";
