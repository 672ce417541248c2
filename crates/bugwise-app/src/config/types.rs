//! Configuration types for Bugwise
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Per-section settings structs

use bugwise_core::LogOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default analysis service base URL (the backend's development server)
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub cache: CacheSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub log: LogSettings,
}

/// Analysis service connection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the `/analyze-bug`, `/bugs` and `/health` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset leaves the HTTP client's defaults.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Last-analysis cache
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheSettings {
    /// Persist the last analysis across restarts
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Override for the storage directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

/// Terminal UI
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key-hint/status bar at the bottom
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_status_bar: true,
        }
    }
}

/// File logging. `BUGWISE_LOG` still wins over `level`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// tracing filter directives, e.g. `"debug"` or `"bugwise_client=trace"`
    #[serde(default)]
    pub level: Option<String>,
}

impl LogSettings {
    pub fn options(&self) -> LogOptions {
        LogOptions {
            dir: self.dir.clone(),
            level: self.level.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout(), None);
        assert!(settings.cache.enabled);
        assert!(settings.ui.show_status_bar);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
[api]
timeout_secs = 30
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout(), Some(Duration::from_secs(30)));
        assert!(settings.cache.enabled);
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
[api]
base_url = "https://bugwise.example.com/api"

[cache]
enabled = false
dir = "/tmp/bugwise"

[ui]
show_status_bar = false

[log]
dir = "/tmp/bugwise/logs"
level = "bugwise_client=trace"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.api.base_url, "https://bugwise.example.com/api");
        assert!(!settings.cache.enabled);
        assert_eq!(settings.cache.dir, Some(PathBuf::from("/tmp/bugwise")));
        assert!(!settings.ui.show_status_bar);

        let log = settings.log.options();
        assert_eq!(log.dir, Some(PathBuf::from("/tmp/bugwise/logs")));
        assert_eq!(log.level.as_deref(), Some("bugwise_client=trace"));
    }

    #[test]
    fn test_log_section_defaults_to_unset() {
        let settings: Settings = toml::from_str("[ui]\nshow_status_bar = true\n").unwrap();
        assert_eq!(settings.log.options(), LogOptions::default());
    }
}
