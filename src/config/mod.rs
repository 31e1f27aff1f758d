//! Configuration module.
//!
//! Precedence chain: defaults → config file → env vars → CLI args.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::source::HttpFetcherOptions;
use crate::state::SessionOptions;

impl ResolvedConfig {
    /// Transport settings for the HTTP fetcher.
    pub fn fetcher_options(&self) -> HttpFetcherOptions {
        HttpFetcherOptions {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout: self.request_timeout,
        }
    }

    /// Session settings for the view session.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            base_page_size: self.page_size,
            auto_grow_page_size: self.auto_grow_page_size,
        }
    }
}
