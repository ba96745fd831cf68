//! `uuidkit one` command.

use std::io::Write;

use crate::cli::OneArgs;
use crate::context::ServiceContext;
use crate::format::format;
use crate::generate::generate_one;

/// Execute the `one` command.
///
/// Generates a single identifier, prints it in the requested format and
/// optionally copies the printed text.
///
/// # Errors
///
/// Returns an error string if generation, output, or copying fails.
pub fn run(ctx: &ServiceContext, args: &OneArgs, out: &mut impl Write) -> Result<(), String> {
    let uuid = generate_one(
        ctx.ids.as_ref(),
        args.generation.version,
        args.generation.namespace.as_deref(),
        args.generation.name.as_deref(),
    )
    .map_err(|e| e.to_string())?;

    let text = format(&uuid, args.output.options());
    writeln!(out, "{text}").map_err(|e| e.to_string())?;

    if args.copy {
        super::copy_and_report(ctx, &text)?;
    }
    Ok(())
}
