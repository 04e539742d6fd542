//! Tracker Configuration
//!
//! Mount point, chart canvas, storage keys and log level. Defaults match the
//! host page shipped in `index.html`; any of them can be overridden with
//! `data-*` attributes on the container element.

use log::LevelFilter;

pub const DEFAULT_CONTAINER_ID: &str = "calorie-tracker-container";
pub const DEFAULT_CANVAS_ID: &str = "chartjs-4";
pub const DEFAULT_GAINED_KEY: &str = "gainedRecords";
pub const DEFAULT_BURNED_KEY: &str = "burnedRecords";

/// localStorage keys for the two record lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub gained: String,
    pub burned: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            gained: DEFAULT_GAINED_KEY.to_string(),
            burned: DEFAULT_BURNED_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub container_id: String,
    pub canvas_id: String,
    pub storage_keys: StorageKeys,
    pub log_level: LevelFilter,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            storage_keys: StorageKeys::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl TrackerConfig {
    /// Apply `data-canvas-id`, `data-gained-key`, `data-burned-key` and
    /// `data-log-level` overrides read through `attr`.
    /// Blank values and unknown log levels are ignored.
    pub fn with_overrides<F>(mut self, attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| attr(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(id) = read("data-canvas-id") {
            self.canvas_id = id;
        }
        if let Some(key) = read("data-gained-key") {
            self.storage_keys.gained = key;
        }
        if let Some(key) = read("data-burned-key") {
            self.storage_keys.burned = key;
        }
        if let Some(level) = read("data-log-level").and_then(|v| v.parse().ok()) {
            self.log_level = level;
        }
        self
    }
}
