//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::clipboard::LiveClipboard;
use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::identifier::LiveIdentifierSource;
use crate::adapters::recording::{RecordingClock, RecordingIdentifierSource};
use crate::adapters::replaying::{ReplayingClock, ReplayingIdentifierSource};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{Clipboard, Clock, FileSystem, IdentifierSource};

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying). Only the identifier source and the clock carry
/// nondeterminism, so only they are recorded and replayed.
pub struct ServiceContext {
    /// Source of canonical UUIDs.
    pub ids: Box<dyn IdentifierSource>,
    /// Clock for export timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for exports.
    pub fs: Box<dyn FileSystem>,
    /// Clipboard for copies.
    pub clipboard: Box<dyn Clipboard>,
}

impl ServiceContext {
    /// Creates a context with real adapters everywhere.
    #[must_use]
    pub fn live() -> Self {
        Self {
            ids: Box::new(LiveIdentifierSource::new()),
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            clipboard: Box::new(LiveClipboard),
        }
    }

    /// Creates a live context whose identifier and clock calls are recorded.
    ///
    /// Drop the context, then call [`RecordingSession::finish`] to write
    /// the cassette to `path`.
    #[must_use]
    pub fn recording(path: &Path) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let ctx = Self {
            ids: Box::new(RecordingIdentifierSource::new(
                Box::new(LiveIdentifierSource::new()),
                session.recorder(),
            )),
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), session.recorder())),
            fs: Box::new(LiveFileSystem),
            clipboard: Box::new(LiveClipboard),
        };
        (ctx, session)
    }

    /// Creates a context serving identifiers and clock readings from the
    /// cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            ids: Box::new(ReplayingIdentifierSource::new(CassetteReplayer::new(&cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(LiveFileSystem),
            clipboard: Box::new(LiveClipboard),
        })
    }
}
