//! Error types shared by the generator core and the command layer.

use serde::{Deserialize, Serialize};

use crate::generate::UuidVersion;

/// Failure reported by an identifier source.
///
/// Serializable so that recorded cassettes can replay failures exactly,
/// which keeps the namespace fallback path deterministic under replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SourceError {
    /// The namespace given for a name-based version is not a hyphenated UUID.
    #[error("invalid namespace {0:?}: expected a hyphenated UUID")]
    InvalidNamespace(String),
    /// A name-based version was requested without a namespace or a name.
    #[error("{0} requires both a namespace and a name")]
    MissingNameInput(UuidVersion),
}

/// Errors surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested count is outside `1..=MAX_BATCH_COUNT`.
    #[error("count must be between 1 and {max} (got {0})", max = crate::generate::MAX_BATCH_COUNT)]
    CountOutOfRange(i64),
    /// A user-supplied identifier is not in canonical hyphenated form.
    #[error("not a canonical UUID: {0:?}")]
    InvalidUuid(String),
    /// The identifier source failed for a single generation.
    #[error("failed to generate UUID: {0}")]
    Source(#[from] SourceError),
    /// The identifier source failed part-way through a batch.
    #[error("batch aborted at entry {index}: {source}")]
    Generation {
        /// Zero-based index of the entry that failed.
        index: usize,
        /// Underlying source failure.
        #[source]
        source: SourceError,
    },
    /// Both the primary and the fallback clipboard paths failed.
    #[error("copy to clipboard failed, please copy manually ({0})")]
    Clipboard(String),
    /// Writing the export file failed.
    #[error("download failed: {0}")]
    Download(String),
    /// There was no content for the requested action.
    #[error("nothing to {0}")]
    NothingTo(&'static str),
}

/// Result alias for uuidkit operations.
pub type Result<T> = std::result::Result<T, Error>;
