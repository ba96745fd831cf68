//! Exporting a batch as a text file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Content type of exported files.
pub const EXPORT_MIME: &str = "text/plain";

/// `uuids_<date>T<time>.txt`, UTC to the second, colons replaced by hyphens.
#[must_use]
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("uuids_{}.txt", at.format("%Y-%m-%dT%H-%M-%S"))
}

/// Writes `content` verbatim into `dir` under a timestamped name.
///
/// # Errors
///
/// Returns [`Error::NothingTo`] for empty content and [`Error::Download`]
/// if the file cannot be written.
pub fn export_batch(ctx: &ServiceContext, dir: &Path, content: &str) -> Result<PathBuf> {
    if content.is_empty() {
        return Err(Error::NothingTo("download"));
    }

    let path = dir.join(export_file_name(ctx.clock.now()));
    ctx.fs
        .write(&path, content)
        .map_err(|e| Error::Download(format!("{}: {e}", path.display())))?;

    info!(path = %path.display(), mime = EXPORT_MIME, bytes = content.len(), "batch exported");
    Ok(path)
}
