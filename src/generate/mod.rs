//! Single and batch generation over an [`IdentifierSource`].
//!
//! Callers never talk to the source directly for name-based versions: they
//! go through [`resolve`], which owns the namespace fallback policy so that
//! single generation, batches and the interactive shell agree on output.

mod batch;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::{Uuid, Variant};

use crate::error::{Error, SourceError};
use crate::format::{CanonicalUuid, CANONICAL_LEN};
use crate::ports::IdentifierSource;

pub use batch::{generate_batch, validate_count, BatchResult, GenerationRequest, MAX_BATCH_COUNT};

/// The well-known DNS namespace used whenever no usable namespace is given.
pub const DNS_NAMESPACE: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// Name used for name-based single generation without user input.
pub const DEFAULT_NAME: &str = "default";

/// Supported UUID versions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Gregorian time and node id.
    V1,
    /// MD5 of namespace and name.
    V3,
    /// Random.
    #[default]
    V4,
    /// SHA-1 of namespace and name.
    V5,
    /// Field-reordered, sortable v1.
    V6,
    /// Unix epoch milliseconds and random bits.
    V7,
}

impl UuidVersion {
    /// Whether this version hashes a namespace and a name.
    #[must_use]
    pub fn is_name_based(self) -> bool {
        matches!(self, Self::V3 | Self::V5)
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::V1 => "v1",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
            Self::V6 => "v6",
            Self::V7 => "v7",
        };
        f.write_str(name)
    }
}

/// Which default name a name-based request falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSlot {
    /// The single-identifier slot; uses [`DEFAULT_NAME`].
    Single,
    /// Entry `i` of a batch; uses `batch-{i}` so entries stay distinct.
    Batch(usize),
}

impl NameSlot {
    fn default_name(self) -> String {
        match self {
            Self::Single => DEFAULT_NAME.to_string(),
            Self::Batch(index) => format!("batch-{index}"),
        }
    }
}

/// Requests one identifier, applying the namespace fallback policy.
///
/// Namespace and name are trimmed first; blank values count as absent.
/// For v3/v5:
///
/// - with both present, the source is tried as-is; if it rejects the
///   namespace, the request is retried against [`DNS_NAMESPACE`] with the
///   original namespace text as the name;
/// - with either missing, [`DNS_NAMESPACE`] and the slot's default name are used.
///
/// # Errors
///
/// Returns the source's error when even the fallback request fails.
pub fn resolve(
    source: &dyn IdentifierSource,
    version: UuidVersion,
    namespace: Option<&str>,
    name: Option<&str>,
    slot: NameSlot,
) -> Result<CanonicalUuid, SourceError> {
    if !version.is_name_based() {
        return source.generate(version, None, None);
    }

    match (non_blank(namespace), non_blank(name)) {
        (Some(namespace), Some(name)) => {
            match source.generate(version, Some(namespace), Some(name)) {
                Err(SourceError::InvalidNamespace(rejected)) => {
                    debug!(%version, namespace = %rejected, "namespace rejected, retrying under DNS");
                    source.generate(version, Some(DNS_NAMESPACE), Some(namespace))
                }
                other => other,
            }
        }
        _ => {
            let default_name = slot.default_name();
            source.generate(version, Some(DNS_NAMESPACE), Some(&default_name))
        }
    }
}

/// Generates the identifier for the single slot.
///
/// # Errors
///
/// Returns [`Error::Source`] if the source fails after fallback.
pub fn generate_one(
    source: &dyn IdentifierSource,
    version: UuidVersion,
    namespace: Option<&str>,
    name: Option<&str>,
) -> Result<CanonicalUuid, Error> {
    Ok(resolve(source, version, namespace, name, NameSlot::Single)?)
}

/// Parses a v3/v5 namespace.
///
/// Accepts the hyphenated 36-character form carrying an RFC variant and a
/// version digit from 1 to 8, plus the nil and max UUIDs.
///
/// # Errors
///
/// Returns [`SourceError::InvalidNamespace`] for anything else.
pub fn parse_namespace(namespace: &str) -> Result<Uuid, SourceError> {
    let invalid = || SourceError::InvalidNamespace(namespace.to_string());
    if namespace.len() != CANONICAL_LEN {
        return Err(invalid());
    }
    let uuid = Uuid::try_parse(namespace).map_err(|_| invalid())?;
    if uuid.is_nil() || uuid.as_u128() == u128::MAX {
        return Ok(uuid);
    }
    if uuid.get_variant() != Variant::RFC4122 || !(1..=8).contains(&uuid.get_version_num()) {
        return Err(invalid());
    }
    Ok(uuid)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
