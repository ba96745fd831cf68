//! Live clipboard adapter.
//!
//! The primary path pipes text into the platform's clipboard tool. The
//! fallback emits an OSC 52 escape on stderr, which most modern terminals
//! (including over SSH) turn into a clipboard write.

use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::ports::clipboard::Clipboard;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Clipboard adapter using external tools and terminal escapes.
pub struct LiveClipboard;

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

impl LiveClipboard {
    /// Clipboard tools to try, in order, for the current platform.
    fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
        if cfg!(target_os = "macos") {
            vec![("pbcopy", NO_ARGS)]
        } else if cfg!(windows) {
            vec![("clip", NO_ARGS)]
        } else {
            let mut tools = Vec::new();
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                tools.push(("wl-copy", NO_ARGS));
            }
            tools.push(("xclip", XCLIP_ARGS));
            tools.push(("xsel", XSEL_ARGS));
            tools.push(("clip.exe", NO_ARGS));
            tools
        }
    }
}

impl Clipboard for LiveClipboard {
    fn write_primary(&self, text: &str) -> Result<(), BoxError> {
        let mut failures = Vec::new();
        for (program, args) in Self::candidates() {
            match pipe_into(program, args, text) {
                Ok(()) => {
                    debug!(program, "copied via clipboard tool");
                    return Ok(());
                }
                Err(e) => failures.push(format!("{program}: {e}")),
            }
        }
        Err(format!("no clipboard tool succeeded ({})", failures.join("; ")).into())
    }

    fn write_fallback(&self, text: &str) -> Result<(), BoxError> {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return Err("stderr is not a terminal".into());
        }
        write!(stderr, "{}", osc52_sequence(text))?;
        stderr.flush()?;
        Ok(())
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<(), BoxError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    // stdin is dropped before waiting so the tool sees end of input.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("exited with {status}").into())
    }
}

/// OSC 52 "set clipboard" escape carrying `text`.
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
