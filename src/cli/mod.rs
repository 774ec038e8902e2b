//! Command-line handling that runs before the TUI starts.
//!
//! ```ignore
//! use storylist::cli::{parse_args, run_cli_command};
//!
//! if let Some(result) = run_cli_command(parse_args(std::env::args())) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]; otherwise prints and returns
/// `Some(Ok(()))`.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::RunTui => None,
    }
}
