//! Version and usage output.

use crate::config::{ENV_API_URL, ENV_LOG_FILE, ENV_LOG_FILTER};

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("storylist {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}\nBrowse and sort Hacker News search results in the terminal.\n\n\
         USAGE:\n    storylist [--version | --help]\n\n\
         ENVIRONMENT:\n    {:<20} search URL (default: front page query)\n    \
         {:<20} log file path\n    {:<20} log filter, e.g. storylist=debug",
        version_text(),
        ENV_API_URL,
        ENV_LOG_FILE,
        ENV_LOG_FILTER
    )
}
