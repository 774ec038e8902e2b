//! Log setup.
//!
//! The TUI owns stdout, so `tracing` output goes to a file instead.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Filter used when the configured one does not parse.
pub const FALLBACK_FILTER: &str = "info";

/// The configured directive if it parses, otherwise [`FALLBACK_FILTER`].
pub fn effective_filter(directive: &str) -> &str {
    if EnvFilter::try_new(directive).is_ok() {
        directive
    } else {
        FALLBACK_FILTER
    }
}

/// Install the global subscriber, appending to `config.log_file`.
///
/// Fails if the file cannot be opened or a subscriber is already set.
pub fn init(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .wrap_err_with(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(effective_filter(&config.log_filter)))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {}", e))?;

    tracing::info!(
        "storylist {} starting, api_url={}",
        env!("CARGO_PKG_VERSION"),
        config.api_url
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_filter_keeps_valid_directives() {
        assert_eq!(effective_filter("debug"), "debug");
        assert_eq!(
            effective_filter("storylist=trace,reqwest=warn"),
            "storylist=trace,reqwest=warn"
        );
    }

    #[test]
    fn test_effective_filter_falls_back() {
        assert_eq!(effective_filter("storylist=loud"), FALLBACK_FILTER);
    }

    #[test]
    fn test_init_fails_for_unwritable_path() {
        let config = AppConfig::default().with_log_file("/nonexistent-dir/deeper/storylist.log");
        assert!(init(&config).is_err());
    }
}
