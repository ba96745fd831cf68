//! Adapters implementing the port traits.
//!
//! - `live` talks to the real system.
//! - `recording` wraps live adapters and captures interactions to a cassette.
//! - `replaying` serves interactions back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;

use serde::{Deserialize, Serialize};

use crate::generate::UuidVersion;

/// Cassette input of one `ids::generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GenerateCall {
    pub(crate) version: UuidVersion,
    pub(crate) namespace: Option<String>,
    pub(crate) name: Option<String>,
}

impl GenerateCall {
    pub(crate) fn new(version: UuidVersion, namespace: Option<&str>, name: Option<&str>) -> Self {
        Self { version, namespace: namespace.map(String::from), name: name.map(String::from) }
    }
}
