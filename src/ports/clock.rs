//! Clock port for timestamping exports.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Export file names embed the time of the export; a recorded clock keeps
/// those names stable under cassette playback.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
