//! Settings loader for `config.toml`

use super::types::Settings;
use crate::cache::{FileStore, PersistentCache};
use bugwise_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const BUGWISE_DIR: &str = "bugwise";

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV: &str = "BUGWISE_API_BASE";

/// `<config_dir>/bugwise/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(BUGWISE_DIR).join(CONFIG_FILENAME))
}

/// Read settings from `path`.
///
/// A missing file yields defaults; an unreadable or invalid one is an error so
/// the caller can report it once logging is up.
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Write a commented default config file at `path`.
///
/// Returns `Ok(false)` without touching anything when the file already exists.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let default_content = r#"# Bugwise Configuration

[api]
# Base URL of the analysis service (overridden by BUGWISE_API_BASE or --base-url)
base_url = "http://127.0.0.1:5000/api"
# Request timeout in seconds (unset = no client-side timeout)
# timeout_secs = 60

[cache]
# Remember the last analysis between runs
enabled = true
# dir = "/path/to/storage"

[ui]
show_status_bar = true

[log]
# Defaults to <data dir>/bugwise/logs
# dir = "/path/to/logs"
# Filter directives; BUGWISE_LOG overrides this
# level = "debug"
"#;

    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}

/// Effective base URL. Precedence: CLI flag, environment, file, default.
pub fn resolve_base_url(settings: &Settings, cli_override: Option<&str>) -> String {
    if let Some(url) = cli_override.filter(|u| !u.trim().is_empty()) {
        return url.trim().to_string();
    }

    if let Ok(url) = std::env::var(API_BASE_ENV) {
        if !url.trim().is_empty() {
            return url.trim().to_string();
        }
    }

    settings.api.base_url.clone()
}

/// Cache backed by the configured storage (in-memory when disabled).
pub fn build_cache(settings: &Settings) -> PersistentCache {
    if !settings.cache.enabled {
        debug!("Cache disabled, last analysis will not persist");
        return PersistentCache::in_memory();
    }

    let dir = settings
        .cache
        .dir
        .clone()
        .unwrap_or_else(FileStore::default_dir);
    debug!("Cache storage at {:?}", dir);
    PersistentCache::new(FileStore::new(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_BASE_URL;
    use bugwise_core::Analysis;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = read_settings(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_init_config_file_writes_loadable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(!init_config_file(&path).unwrap());
        assert_eq!(read_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    #[serial]
    fn test_resolve_base_url_precedence() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://file.example/api".into();

        std::env::remove_var(API_BASE_ENV);
        assert_eq!(resolve_base_url(&settings, None), "http://file.example/api");

        std::env::set_var(API_BASE_ENV, "http://env.example/api");
        assert_eq!(resolve_base_url(&settings, None), "http://env.example/api");
        assert_eq!(
            resolve_base_url(&settings, Some("http://cli.example/api")),
            "http://cli.example/api"
        );
        std::env::remove_var(API_BASE_ENV);
    }

    #[test]
    #[serial]
    fn test_resolve_base_url_default() {
        std::env::remove_var(API_BASE_ENV);
        assert_eq!(
            resolve_base_url(&Settings::default(), Some("  ")),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_build_cache_uses_configured_dir() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.cache.dir = Some(dir.path().to_path_buf());

        build_cache(&settings).save(&Analysis::new("e", "r", vec![], "c"));
        assert!(dir.path().join("lastAnalysis.json").exists());
    }

    #[test]
    fn test_build_cache_disabled_is_memory_only() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.cache.enabled = false;
        settings.cache.dir = Some(dir.path().to_path_buf());

        let cache = build_cache(&settings);
        cache.save(&Analysis::default());
        assert!(cache.load().is_some());
        assert!(!dir.path().join("lastAnalysis.json").exists());
    }
}
