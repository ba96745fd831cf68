//! Batch generation.

use std::io::{self, Write};

use tracing::{debug, info};

use super::{resolve, NameSlot, UuidVersion};
use crate::error::Error;
use crate::format::{format, FormatOptions};
use crate::ports::IdentifierSource;

/// Largest accepted batch.
pub const MAX_BATCH_COUNT: i64 = 1_000_000;

/// A request for `count` identifiers of one version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Version to generate.
    pub version: UuidVersion,
    /// Number of entries; must be within `1..=MAX_BATCH_COUNT`.
    pub count: i64,
    /// Namespace for v3/v5.
    pub namespace: Option<String>,
    /// Name for v3/v5.
    pub name: Option<String>,
}

impl GenerationRequest {
    /// A request without name input.
    #[must_use]
    pub fn new(version: UuidVersion, count: i64) -> Self {
        Self { version, count, namespace: None, name: None }
    }
}

/// Formatted entries in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: Vec<String>,
}

impl BatchResult {
    /// The entries in order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The entries joined by newlines, as presented and copied.
    #[must_use]
    pub fn joined(&self) -> String {
        self.entries.join("\n")
    }

    /// Streams entries one per line without building the joined text.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }
}

/// Checks `count` against `1..=MAX_BATCH_COUNT`.
///
/// # Errors
///
/// Returns [`Error::CountOutOfRange`] when out of bounds.
pub fn validate_count(count: i64) -> Result<usize, Error> {
    if !(1..=MAX_BATCH_COUNT).contains(&count) {
        return Err(Error::CountOutOfRange(count));
    }
    usize::try_from(count).map_err(|_| Error::CountOutOfRange(count))
}

/// Generates and formats `request.count` identifiers.
///
/// The count is validated before the source is touched. The first source
/// failure aborts the whole batch; nothing partial is returned.
///
/// # Errors
///
/// Returns [`Error::CountOutOfRange`] or [`Error::Generation`].
pub fn generate_batch(
    source: &dyn IdentifierSource,
    request: &GenerationRequest,
    options: FormatOptions,
) -> Result<BatchResult, Error> {
    let count = validate_count(request.count)?;
    debug!(version = %request.version, count, ?options, "generating batch");

    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let uuid = resolve(
            source,
            request.version,
            request.namespace.as_deref(),
            request.name.as_deref(),
            NameSlot::Batch(index),
        )
        .map_err(|err| Error::Generation { index, source: err })?;
        entries.push(format(&uuid, options));
    }

    info!(version = %request.version, count, "batch generated");
    Ok(BatchResult { entries })
}
