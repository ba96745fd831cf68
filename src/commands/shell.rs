//! `uuidkit shell` command: an interactive generator session.
//!
//! Each input line is one command. Failures are printed as `error: ...`
//! and the session carries on with its previous state.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::cli::ShellArgs;
use crate::clipboard::{copy_text, CopyOutcome};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::export::export_batch;
use crate::generate::UuidVersion;
use crate::session::Session;

const HELP: &str = "\
commands:
  show                  print the current identifier
  refresh               generate a new identifier
  version <v1..v7>      switch version and regenerate
  format <string|hex|binary|base64>
  case <lower|upper>
  hyphens <keep|remove>
  namespace [uuid]      set or clear the v3/v5 namespace
  name [text]           set or clear the v3/v5 name
  settings              print the active settings
  batch <count>         generate 1 to 1000000 identifiers
  copy                  copy the current identifier
  copy-batch            copy the last batch
  download              write the last batch to the export directory
  clear                 discard the last batch
  help                  print this list
  quit                  leave the shell";

/// What the loop does after a command.
enum Flow {
    Continue,
    Quit,
}

/// A failed shell command.
#[derive(Debug)]
enum ShellError {
    /// Reported to the user; the session continues.
    Command(String),
    /// Output is gone; the session ends.
    Io(io::Error),
}

impl From<Error> for ShellError {
    fn from(err: Error) -> Self {
        Self::Command(err.to_string())
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Execute the `shell` command.
///
/// Generates the initial identifier, then reads commands from `input`
/// until `quit` or end of input. A `> ` prompt is written before each
/// command when `prompt` is set.
///
/// # Errors
///
/// Returns an error string only if reading input or writing output fails.
pub fn run(
    ctx: &ServiceContext,
    config: &Config,
    args: &ShellArgs,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> Result<(), String> {
    let mut session = Session::new(args.generation.version, args.output.options());
    session.set_namespace(args.generation.namespace.clone());
    session.set_name(args.generation.name.clone());

    let mut shell = Shell { ctx, config, session, out };
    shell.start().map_err(|e| e.to_string())?;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(shell.out, "> ").and_then(|()| shell.out.flush()).map_err(|e| e.to_string())?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| e.to_string())?;
        match shell.execute(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(ShellError::Command(message)) => {
                writeln!(shell.out, "error: {message}").map_err(|e| e.to_string())?;
            }
            Err(ShellError::Io(err)) => return Err(err.to_string()),
        }
    }
    Ok(())
}

struct Shell<'a, W: Write> {
    ctx: &'a ServiceContext,
    config: &'a Config,
    session: Session,
    out: &'a mut W,
}

impl<W: Write> Shell<'_, W> {
    fn start(&mut self) -> io::Result<()> {
        let refreshed = self.session.refresh(self.ctx.ids.as_ref()).map(|_| ());
        match refreshed {
            Ok(()) => self.show(),
            Err(err) => writeln!(self.out, "error: {err}"),
        }
    }

    fn show(&mut self) -> io::Result<()> {
        match self.session.display() {
            Some(text) => writeln!(self.out, "{text}"),
            None => writeln!(self.out, "(no identifier)"),
        }
    }

    fn execute(&mut self, line: &str) -> Result<Flow, ShellError> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" | "?" => writeln!(self.out, "{HELP}")?,
            "show" => self.show()?,
            "refresh" => {
                self.session.refresh(self.ctx.ids.as_ref())?;
                self.show()?;
            }
            "version" => {
                let version: UuidVersion = parse_choice("version", arg)?;
                self.session.set_version(version, self.ctx.ids.as_ref())?;
                self.show()?;
            }
            "format" => {
                self.session.set_format(parse_choice("format", arg)?);
                self.show()?;
            }
            "case" => {
                self.session.set_case(parse_choice("case", arg)?);
                self.show()?;
            }
            "hyphens" => {
                self.session.set_hyphens(parse_choice("hyphens", arg)?);
                self.show()?;
            }
            "namespace" => {
                self.session.set_namespace(non_empty(arg));
                writeln!(self.out, "namespace {}", if arg.is_empty() { "cleared" } else { "set" })?;
            }
            "name" => {
                self.session.set_name(non_empty(arg));
                writeln!(self.out, "name {}", if arg.is_empty() { "cleared" } else { "set" })?;
            }
            "settings" => {
                let options = self.session.options();
                writeln!(
                    self.out,
                    "version {} format {} case {} hyphens {}",
                    self.session.version(),
                    options.format,
                    options.case,
                    options.hyphens
                )?;
            }
            "batch" => {
                let count: i64 = arg
                    .parse()
                    .map_err(|_| ShellError::Command(format!("count must be a number (got {arg:?})")))?;
                let batch = self.session.run_batch(self.ctx.ids.as_ref(), count)?;
                batch.write_to(&mut *self.out)?;
            }
            "copy" => {
                let text = self.session.display().unwrap_or_default();
                self.copy(&text)?;
            }
            "copy-batch" => {
                let text = self.session.batch().map(|b| b.joined()).unwrap_or_default();
                self.copy(&text)?;
            }
            "download" => {
                let text = self.session.batch().map(|b| b.joined()).unwrap_or_default();
                let path = export_batch(self.ctx, &self.config.export_dir, &text)?;
                writeln!(self.out, "saved {}", path.display())?;
            }
            "clear" => {
                self.session.clear_batch();
                writeln!(self.out, "batch cleared")?;
            }
            other => {
                return Err(ShellError::Command(format!(
                    "unknown command {other:?}, type `help` for a list"
                )));
            }
        }
        Ok(Flow::Continue)
    }

    fn copy(&mut self, text: &str) -> Result<(), ShellError> {
        match copy_text(self.ctx.clipboard.as_ref(), text)? {
            CopyOutcome::Primary => writeln!(self.out, "copied")?,
            CopyOutcome::Fallback => writeln!(self.out, "copied via terminal escape")?,
        }
        Ok(())
    }
}

fn non_empty(arg: &str) -> Option<String> {
    (!arg.is_empty()).then(|| arg.to_string())
}

/// Parses a clap value name, listing the accepted names on failure.
fn parse_choice<T: ValueEnum>(what: &str, arg: &str) -> Result<T, ShellError> {
    T::from_str(arg, true).map_err(|_| {
        let accepted: Vec<String> = T::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value)
            .map(|value| value.get_name().to_string())
            .collect();
        ShellError::Command(format!("unknown {what} {arg:?}, expected one of: {}", accepted.join(", ")))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::cli::{FormatArgs, GenerationArgs};
    use crate::generate::testing::ScriptedSource;
    use crate::ports::{Clipboard, Clock, FileSystem};

    type BoxError = Box<dyn std::error::Error + Send + Sync>;
    type Files = Arc<Mutex<HashMap<PathBuf, String>>>;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            "2025-01-02T03:04:05Z".parse().unwrap()
        }
    }

    struct MemFs(Files);

    impl FileSystem for MemFs {
        fn write(&self, path: &Path, contents: &str) -> Result<(), BoxError> {
            self.0.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }
    }

    struct MemClipboard(Arc<Mutex<Vec<String>>>);

    impl Clipboard for MemClipboard {
        fn write_primary(&self, text: &str) -> Result<(), BoxError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn write_fallback(&self, _text: &str) -> Result<(), BoxError> {
            Err("unused".into())
        }
    }

    struct Harness {
        files: Files,
        copied: Arc<Mutex<Vec<String>>>,
        output: String,
    }

    fn run_script(args: &ShellArgs, script: &str) -> Harness {
        let files = Files::default();
        let copied = Arc::new(Mutex::new(Vec::new()));
        let ctx = ServiceContext {
            ids: Box::new(ScriptedSource::default()),
            clock: Box::new(FixedClock),
            fs: Box::new(MemFs(Arc::clone(&files))),
            clipboard: Box::new(MemClipboard(Arc::clone(&copied))),
        };
        let config = Config { export_dir: PathBuf::from("exports"), ..Config::default() };

        let mut out = Vec::new();
        run(&ctx, &config, args, script.as_bytes(), &mut out, false).unwrap();
        Harness { files, copied, output: String::from_utf8(out).unwrap() }
    }

    fn default_args() -> ShellArgs {
        ShellArgs { generation: GenerationArgs::default(), output: FormatArgs::default() }
    }

    #[test]
    fn prints_initial_identifier_and_rerenders_on_format_change() {
        let harness = run_script(&default_args(), "hyphens remove\ncase upper\nformat binary\n");
        let lines: Vec<&str> = harness.output.lines().collect();
        assert_eq!(
            lines,
            [
                "00000000-0000-0000-0000-000000000001",
                "00000000000000000000000000000001",
                "00000000000000000000000000000001",
                "1",
            ]
        );
    }

    #[test]
    fn version_change_regenerates() {
        let harness = run_script(&default_args(), "version v5\nrefresh\n");
        let lines: Vec<&str> = harness.output.lines().collect();
        assert_eq!(lines[1], "916180a7-0b43-5c08-b3c8-c738826880bb");
        assert_eq!(lines[2], "916180a7-0b43-5c08-b3c8-c738826880bb");
    }

    #[test]
    fn name_inputs_apply_to_later_generation() {
        let harness =
            run_script(&default_args(), "version v5\nnamespace not-a-uuid\nname x\nrefresh\n");
        assert_eq!(harness.output.lines().last(), Some("10927d06-1f0c-5427-87ff-8a2b17b9ba0c"));
        assert!(harness.output.contains("namespace set\nname set\n"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let harness = run_script(&default_args(), "batch 0\nformat octal\nbogus\nshow\n");
        let lines: Vec<&str> = harness.output.lines().collect();
        assert_eq!(lines[1], "error: count must be between 1 and 1000000 (got 0)");
        assert!(lines[2].starts_with("error: unknown format \"octal\""), "{}", lines[2]);
        assert!(lines[3].starts_with("error: unknown command \"bogus\""), "{}", lines[3]);
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn batch_copy_and_download_share_content() {
        let args = ShellArgs {
            generation: GenerationArgs::default(),
            output: FormatArgs { format: crate::format::OutputFormat::Hex, ..FormatArgs::default() },
        };
        let harness = run_script(&args, "batch 2\ncopy-batch\ndownload\n");

        let expected = "00000000000000000000000000000002\n00000000000000000000000000000003";
        assert_eq!(*harness.copied.lock().unwrap(), vec![expected.to_string()]);
        let files = harness.files.lock().unwrap();
        let path = Path::new("exports/uuids_2025-01-02T03-04-05.txt");
        assert_eq!(files.get(path).map(String::as_str), Some(expected));
        assert!(harness.output.contains("saved exports/uuids_2025-01-02T03-04-05.txt"));
    }

    #[test]
    fn nothing_to_copy_or_download_without_batch() {
        let harness = run_script(&default_args(), "copy-batch\ndownload\nbatch 1\nclear\ndownload\n");
        let errors: Vec<&str> = harness.output.lines().filter(|l| l.starts_with("error:")).collect();
        assert_eq!(
            errors,
            ["error: nothing to copy", "error: nothing to download", "error: nothing to download"]
        );
        assert!(harness.files.lock().unwrap().is_empty());
    }

    #[test]
    fn copy_takes_the_displayed_text() {
        let harness = run_script(&default_args(), "case upper\ncopy\nquit\nrefresh\n");
        assert_eq!(
            *harness.copied.lock().unwrap(),
            vec!["00000000-0000-0000-0000-000000000001".to_string()]
        );
        assert!(harness.output.ends_with("copied\n"));
    }
}
