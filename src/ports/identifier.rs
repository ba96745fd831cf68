//! Identifier source port for producing canonical UUIDs.

use crate::error::SourceError;
use crate::format::CanonicalUuid;
use crate::generate::UuidVersion;

/// Produces one canonical UUID per call.
///
/// Abstracting generation allows deterministic replay by substituting
/// recorded identifiers during tests and cassette playback.
pub trait IdentifierSource: Send + Sync {
    /// Generates an identifier of the given version.
    ///
    /// `namespace` and `name` are only read for name-based versions, where
    /// both are required. Callers normally go through
    /// [`crate::generate::resolve`] rather than calling this directly.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidNamespace`] if `namespace` is not a
    /// hyphenated UUID, or [`SourceError::MissingNameInput`] if a name-based
    /// version is requested without both inputs.
    fn generate(
        &self,
        version: UuidVersion,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<CanonicalUuid, SourceError>;
}
