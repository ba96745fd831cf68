//! The canonical hyphenated UUID text consumed by the formatter.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Length of the hyphenated form: 32 hex digits plus 4 hyphens.
pub const CANONICAL_LEN: usize = 36;

/// A UUID in `xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx` form.
///
/// Keeps the text exactly as produced (letter case included) alongside the
/// parsed 128-bit value, so renderers never need to re-parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalUuid {
    text: String,
    value: Uuid,
}

impl CanonicalUuid {
    /// Parses a hyphenated 36-character UUID.
    ///
    /// Simple, braced and URN forms are rejected even though `uuid` accepts them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUuid`] if `text` is not in canonical form.
    pub fn parse(text: &str) -> Result<Self, Error> {
        if text.len() != CANONICAL_LEN {
            return Err(Error::InvalidUuid(text.to_string()));
        }
        let value = Uuid::try_parse(text).map_err(|_| Error::InvalidUuid(text.to_string()))?;
        Ok(Self { text: text.to_string(), value })
    }

    /// The text as it was produced.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed value.
    #[must_use]
    pub fn value(&self) -> Uuid {
        self.value
    }
}

impl From<Uuid> for CanonicalUuid {
    fn from(value: Uuid) -> Self {
        Self { text: value.hyphenated().to_string(), value }
    }
}

impl TryFrom<String> for CanonicalUuid {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<CanonicalUuid> for String {
    fn from(uuid: CanonicalUuid) -> Self {
        uuid.text
    }
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
