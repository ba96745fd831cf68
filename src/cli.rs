//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::format::{FormatOptions, Hyphens, LetterCase, OutputFormat};
use crate::generate::UuidVersion;

/// Top-level CLI parser for `uuidkit`.
#[derive(Debug, Parser)]
#[command(name = "uuidkit", version, about = "Generate and reformat UUIDs")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a single identifier.
    One(OneArgs),
    /// Generate many identifiers, one per line.
    Batch(BatchArgs),
    /// Re-render an existing UUID in another format.
    Format(FormatCommandArgs),
    /// Start an interactive session reading commands from stdin.
    Shell(ShellArgs),
}

/// Which identifiers to generate.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerationArgs {
    /// UUID version.
    #[arg(short = 'u', long = "uuid-version", value_enum, default_value_t)]
    pub version: UuidVersion,
    /// Namespace UUID for v3/v5. Anything else is hashed as a name under the DNS namespace.
    #[arg(long)]
    pub namespace: Option<String>,
    /// Name for v3/v5.
    #[arg(long)]
    pub name: Option<String>,
}

/// How identifiers are rendered.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Output encoding.
    #[arg(short = 'f', long, value_enum, default_value_t)]
    pub format: OutputFormat,
    /// Letter case (string format only).
    #[arg(long, value_enum, default_value_t)]
    pub case: LetterCase,
    /// Keep or remove hyphens (string format only).
    #[arg(long, value_enum, default_value_t)]
    pub hyphens: Hyphens,
}

impl FormatArgs {
    /// The rendering options these flags select.
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        FormatOptions { format: self.format, case: self.case, hyphens: self.hyphens }
    }
}

/// Arguments of `uuidkit one`.
#[derive(Debug, Clone, Args)]
pub struct OneArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub generation: GenerationArgs,
    #[command(flatten)]
    #[allow(missing_docs)]
    pub output: FormatArgs,
    /// Also copy the result to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

/// Arguments of `uuidkit batch`.
#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Number of identifiers (1 to 1000000).
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    pub count: i64,
    #[command(flatten)]
    #[allow(missing_docs)]
    pub generation: GenerationArgs,
    #[command(flatten)]
    #[allow(missing_docs)]
    pub output: FormatArgs,
    /// Also copy the batch to the clipboard.
    #[arg(long)]
    pub copy: bool,
    /// Write the batch to a timestamped file in the export directory instead of stdout.
    #[arg(long)]
    pub download: bool,
}

/// Arguments of `uuidkit format`.
#[derive(Debug, Clone, Args)]
pub struct FormatCommandArgs {
    /// A UUID in hyphenated 36-character form.
    pub uuid: String,
    #[command(flatten)]
    #[allow(missing_docs)]
    pub output: FormatArgs,
}

/// Arguments of `uuidkit shell`.
#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub generation: GenerationArgs,
    #[command(flatten)]
    #[allow(missing_docs)]
    pub output: FormatArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn one_defaults_to_v4_string() {
        let cli = Cli::parse_from(["uuidkit", "one"]);
        let Command::One(args) = cli.command else { panic!("expected one") };
        assert_eq!(args.generation.version, UuidVersion::V4);
        assert_eq!(args.output.options(), FormatOptions::default());
        assert!(!args.copy);
    }

    #[test]
    fn parses_batch_options() {
        let cli = Cli::parse_from([
            "uuidkit", "batch", "-n", "5", "-u", "v5", "--namespace", "ns", "--name", "x", "-f",
            "string", "--case", "upper", "--hyphens", "remove", "--download",
        ]);
        let Command::Batch(args) = cli.command else { panic!("expected batch") };
        assert_eq!(args.count, 5);
        assert_eq!(args.generation.version, UuidVersion::V5);
        assert_eq!(args.generation.namespace.as_deref(), Some("ns"));
        assert_eq!(args.output.case, LetterCase::Upper);
        assert_eq!(args.output.hyphens, Hyphens::Remove);
        assert!(args.download);
    }

    #[test]
    fn negative_count_reaches_validation() {
        let cli = Cli::parse_from(["uuidkit", "batch", "--count", "-3"]);
        let Command::Batch(args) = cli.command else { panic!("expected batch") };
        assert_eq!(args.count, -3);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["uuidkit", "one", "-f", "octal"]).is_err());
    }

    #[test]
    fn format_takes_a_positional_uuid() {
        let cli = Cli::parse_from(["uuidkit", "format", "f81d4fae-7dec-11d0-a765-00a0c91e6bf6", "-f", "base64"]);
        let Command::Format(args) = cli.command else { panic!("expected format") };
        assert_eq!(args.uuid, "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
        assert_eq!(args.output.format, OutputFormat::Base64);
    }
}
