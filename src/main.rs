//! Binary entrypoint for the `uuidkit` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "panic");
        eprintln!("unexpected error, please try again");
    }));

    // Recording and replay are handled in commands::dispatch via UUIDKIT_RECORD / UUIDKIT_REPLAY.
    match uuidkit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
