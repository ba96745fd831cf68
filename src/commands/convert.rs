//! `uuidkit format` command.

use std::io::Write;

use crate::cli::FormatCommandArgs;
use crate::format::{format, CanonicalUuid};

/// Execute the `format` command: re-render an existing UUID.
///
/// # Errors
///
/// Returns an error string if the input is not a hyphenated UUID or the
/// output cannot be written.
pub fn run(args: &FormatCommandArgs, out: &mut impl Write) -> Result<(), String> {
    let uuid = CanonicalUuid::parse(args.uuid.trim()).map_err(|e| e.to_string())?;
    writeln!(out, "{}", format(&uuid, args.output.options())).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FormatArgs;
    use crate::format::OutputFormat;

    fn render(uuid: &str, format: OutputFormat) -> Result<String, String> {
        let args = FormatCommandArgs {
            uuid: uuid.to_string(),
            output: FormatArgs { format, ..FormatArgs::default() },
        };
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn renders_base64() {
        let out = render(" f81d4fae-7dec-11d0-a765-00a0c91e6bf6\n", OutputFormat::Base64).unwrap();
        assert_eq!(out, "+B1Prn3sEdCnZQCgyR5r9g==\n");
    }

    #[test]
    fn rejects_unhyphenated_input() {
        let err = render("f81d4fae7dec11d0a76500a0c91e6bf6", OutputFormat::Hex).unwrap_err();
        assert!(err.contains("f81d4fae7dec11d0a76500a0c91e6bf6"), "{err}");
    }
}
