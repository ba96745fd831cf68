//! A recording session shared by the recording adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Owns the recorder that every recording adapter of one run writes into.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Starts a session writing to `path` when finished.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map_or_else(|| "uuidkit".to_string(), |s| s.to_string_lossy().into_owned());
        Self { recorder: Arc::new(Mutex::new(CassetteRecorder::new(path, name))) }
    }

    /// A handle for a recording adapter.
    #[must_use]
    pub fn recorder(&self) -> Arc<Mutex<CassetteRecorder>> {
        Arc::clone(&self.recorder)
    }

    /// Writes the cassette.
    ///
    /// All adapters holding a handle must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a handle is still alive or the write fails.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}
