//! `uuidkit batch` command.

use std::io::Write;

use crate::cli::BatchArgs;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::export::export_batch;
use crate::generate::{generate_batch, GenerationRequest};

/// Execute the `batch` command.
///
/// Prints one identifier per line, or with `--download` writes them to a
/// timestamped file in the export directory and prints its path.
///
/// # Errors
///
/// Returns an error string if the count is out of range, generation fails,
/// or the output cannot be written, copied, or exported.
pub fn run(
    ctx: &ServiceContext,
    config: &Config,
    args: &BatchArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let request = GenerationRequest {
        version: args.generation.version,
        count: args.count,
        namespace: args.generation.namespace.clone(),
        name: args.generation.name.clone(),
    };
    let batch = generate_batch(ctx.ids.as_ref(), &request, args.output.options())
        .map_err(|e| e.to_string())?;

    if args.download {
        let path =
            export_batch(ctx, &config.export_dir, &batch.joined()).map_err(|e| e.to_string())?;
        writeln!(out, "{}", path.display()).map_err(|e| e.to_string())?;
    } else {
        batch.write_to(out).map_err(|e| e.to_string())?;
    }

    if args.copy {
        super::copy_and_report(ctx, &batch.joined())?;
    }
    Ok(())
}
