//! Rendering canonical UUIDs into their textual encodings.
//!
//! Every renderer is a pure function of the canonical text and the active
//! [`FormatOptions`]. Case and hyphen options only affect
//! [`OutputFormat::String`]:
//!
//! - `Hex` keeps whatever letter case the source produced.
//! - `Binary` drops leading zero bits, so its length varies per identifier.
//! - `Base64` always encodes the 16 raw bytes with padding.

mod canonical;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::ValueEnum;

pub use canonical::{CanonicalUuid, CANONICAL_LEN};

/// Output encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical text, subject to case and hyphen options.
    #[default]
    String,
    /// 32 hex digits, no hyphens.
    Hex,
    /// The 128-bit value in base 2 without leading zeros.
    Binary,
    /// The 16 raw bytes in standard padded Base64.
    Base64,
}

/// Letter case for the `string` format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LetterCase {
    /// `a`-`f`.
    #[default]
    Lower,
    /// `A`-`F`.
    Upper,
}

/// Hyphen handling for the `string` format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Hyphens {
    /// Keep the four group separators.
    #[default]
    Keep,
    /// Strip all separators.
    Remove,
}

macro_rules! display_as_value_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_possible_value() {
                    Some(value) => f.write_str(value.get_name()),
                    None => Ok(()),
                }
            }
        })*
    };
}

display_as_value_name!(OutputFormat, LetterCase, Hyphens);

/// The active rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Encoding to render.
    pub format: OutputFormat,
    /// Letter case, `string` only.
    pub case: LetterCase,
    /// Hyphen handling, `string` only.
    pub hyphens: Hyphens,
}

#[cfg(test)]
impl FormatOptions {
    pub(crate) fn with_format(format: OutputFormat) -> Self {
        Self { format, ..Self::default() }
    }
}

/// Renders `uuid` according to `options`.
#[must_use]
pub fn format(uuid: &CanonicalUuid, options: FormatOptions) -> String {
    match options.format {
        OutputFormat::String => render_string(uuid, options.case, options.hyphens),
        OutputFormat::Hex => strip_hyphens(uuid.as_str()),
        OutputFormat::Binary => format!("{:b}", uuid.value().as_u128()),
        OutputFormat::Base64 => STANDARD.encode(uuid.value().as_bytes()),
    }
}

fn render_string(uuid: &CanonicalUuid, case: LetterCase, hyphens: Hyphens) -> String {
    let text = match hyphens {
        Hyphens::Keep => uuid.as_str().to_string(),
        Hyphens::Remove => strip_hyphens(uuid.as_str()),
    };
    match case {
        LetterCase::Lower => text.to_ascii_lowercase(),
        LetterCase::Upper => text.to_ascii_uppercase(),
    }
}

fn strip_hyphens(text: &str) -> String {
    text.chars().filter(|&c| c != '-').collect()
}
