//! Live adapter for the `IdentifierSource` port, backed by the `uuid` crate.

use uuid::Uuid;

use crate::error::SourceError;
use crate::format::CanonicalUuid;
use crate::generate::{parse_namespace, UuidVersion};
use crate::ports::IdentifierSource;

/// Generates identifiers with the `uuid` crate.
///
/// Time-based versions (v1, v6) use a random node id with the multicast bit
/// set, fixed for the lifetime of the source.
pub struct LiveIdentifierSource {
    node_id: [u8; 6],
}

impl LiveIdentifierSource {
    /// Creates a source with a fresh random node id.
    #[must_use]
    pub fn new() -> Self {
        let random = Uuid::new_v4();
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&random.as_bytes()[10..]);
        node_id[0] |= 0x01;
        Self { node_id }
    }
}

impl Default for LiveIdentifierSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierSource for LiveIdentifierSource {
    fn generate(
        &self,
        version: UuidVersion,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<CanonicalUuid, SourceError> {
        let uuid = match version {
            UuidVersion::V1 => Uuid::now_v1(&self.node_id),
            UuidVersion::V4 => Uuid::new_v4(),
            UuidVersion::V6 => Uuid::now_v6(&self.node_id),
            UuidVersion::V7 => Uuid::now_v7(),
            UuidVersion::V3 | UuidVersion::V5 => {
                let (Some(namespace), Some(name)) = (namespace, name) else {
                    return Err(SourceError::MissingNameInput(version));
                };
                let namespace = parse_namespace(namespace)?;
                if version == UuidVersion::V3 {
                    Uuid::new_v3(&namespace, name.as_bytes())
                } else {
                    Uuid::new_v5(&namespace, name.as_bytes())
                }
            }
        };
        Ok(uuid.into())
    }
}
