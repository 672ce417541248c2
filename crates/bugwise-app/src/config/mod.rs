//! Configuration file parsing for Bugwise
//!
//! Supports `<config_dir>/bugwise/config.toml` (or an explicit path) with
//! environment and command-line overrides for the service URL.

pub mod settings;
pub mod types;

pub use settings::{
    build_cache, default_config_path, init_config_file, read_settings, resolve_base_url,
    API_BASE_ENV,
};
pub use types::*;
