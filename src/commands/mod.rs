//! Command dispatch and handlers.

pub mod batch;
pub mod convert;
pub mod one;
pub mod shell;

use std::io::{self, IsTerminal};

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::clipboard::{copy_text, CopyOutcome};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `config.record` is set, identifier and clock calls are recorded to
/// that cassette; when `config.replay` is set, they are served from it.
///
/// # Errors
///
/// Returns an error string if the configuration is inconsistent or the
/// selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    config.validate()?;

    if let Some(path) = &config.record {
        let (ctx, session) = ServiceContext::recording(path);
        let result = dispatch_with_context(command, &ctx, config);
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
        return result;
    }

    let ctx = match &config.replay {
        Some(path) => ServiceContext::replaying(path)?,
        None => ServiceContext::live(),
    };
    dispatch_with_context(command, &ctx, config)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::One(args) => one::run(ctx, args, &mut stdout),
        Command::Batch(args) => batch::run(ctx, config, args, &mut stdout),
        Command::Format(args) => convert::run(args, &mut stdout),
        Command::Shell(args) => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            shell::run(ctx, config, args, stdin.lock(), &mut stdout, prompt)
        }
    }
}

/// Finish a recording session and print the cassette path.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let path = session.finish()?;
    eprintln!("Recording saved to: {}", path.display());
    Ok(())
}

/// Copies `text` and reports which clipboard path took it on stderr.
fn copy_and_report(ctx: &ServiceContext, text: &str) -> Result<(), String> {
    match copy_text(ctx.clipboard.as_ref(), text).map_err(|e| e.to_string())? {
        CopyOutcome::Primary => eprintln!("Copied to clipboard."),
        CopyOutcome::Fallback => eprintln!("Copied via terminal clipboard escape."),
    }
    Ok(())
}
