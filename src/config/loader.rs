//! Configuration file loading with precedence handling.

use crate::model::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default collection endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Default API key for the demo endpoint.
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";

/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or a value outside its allowed set.
    #[error("Invalid config in {path}: {reason}")]
    ParseError {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An override (env var or CLI) carries a value outside its allowed set.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/userdir/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Collection endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// API key sent with every request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base client page size (3, 6 or 12).
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Grow the client page size as more server pages are loaded.
    #[serde(default)]
    pub auto_grow_page_size: Option<bool>,

    /// Transport timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Collection endpoint URL.
    pub endpoint: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Base client page size.
    pub page_size: PageSize,
    /// Grow the client page size after each load-more.
    pub auto_grow_page_size: bool,
    /// Transport timeout per request.
    pub request_timeout: Duration,
    /// Log file written by the tracing subscriber.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            page_size: PageSize::default(),
            auto_grow_page_size: true,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/userdir/userdir.log` on Unix-like systems, or the
/// appropriate platform path elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("userdir").join("userdir.log")
    } else {
        PathBuf::from("userdir.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/userdir/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("userdir").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `USERDIR_CONFIG` environment variable
/// 3. Default path `~/.config/userdir/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("USERDIR_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        api_key: config.api_key.unwrap_or(defaults.api_key),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        auto_grow_page_size: config
            .auto_grow_page_size
            .unwrap_or(defaults.auto_grow_page_size),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `USERDIR_ENDPOINT`: Override endpoint
/// - `USERDIR_API_KEY`: Override API key
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var("USERDIR_ENDPOINT") {
        config.endpoint = endpoint;
    }

    if let Ok(api_key) = std::env::var("USERDIR_API_KEY") {
        config.api_key = api_key;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if `page_size_override` is not 3, 6 or 12.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    page_size_override: Option<usize>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(size) = page_size_override {
        config.page_size = PageSize::try_from(size).map_err(|e| ConfigError::InvalidValue {
            field: "page_size",
            reason: e.to_string(),
        })?;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
