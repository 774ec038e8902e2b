//! Runtime configuration.

use std::path::PathBuf;

use crate::search::SEARCH_API_URL;

/// Env var overriding the search URL (query string included).
pub const ENV_API_URL: &str = "STORYLIST_API_URL";
/// Env var overriding the log file path.
pub const ENV_LOG_FILE: &str = "STORYLIST_LOG_FILE";
/// Env var holding a `tracing` filter directive, e.g. `storylist=debug`.
pub const ENV_LOG_FILTER: &str = "STORYLIST_LOG";

/// Configuration for a run.
///
/// # Example
///
/// ```
/// use storylist::config::AppConfig;
///
/// let config = AppConfig::default().with_log_filter("debug");
/// assert_eq!(config.log_filter, "debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Search endpoint
    pub api_url: String,
    /// Where log output goes; the terminal itself belongs to the TUI
    pub log_file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: SEARCH_API_URL.to_string(),
            log_file: std::env::temp_dir().join("storylist.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by any non-empty `STORYLIST_*` variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_var(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(filter) = non_empty_var(ENV_LOG_FILTER) {
            config = config.with_log_filter(filter);
        }
        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
