//! Core library entry for the `uuidkit` CLI.
//!
//! Generates UUIDs of versions 1, 3, 4, 5, 6 and 7 through an
//! [`ports::IdentifierSource`], renders them as string, hex, binary or
//! base64 text, and delivers them to stdout, the clipboard, or an export
//! file.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod format;
pub mod generate;
pub mod logging;
pub mod ports;
pub mod session;

pub use error::{Error, Result};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Configuration is read from the environment and logging is initialized
/// before the command runs.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version go to stdout and are not failures.
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let config = config::Config::from_env();
    logging::init(&config.log_filter);
    commands::dispatch(&cli.command, &config)
}
