//! Filesystem port for export file I/O.

use std::path::Path;

/// Provides filesystem access for writing exported batches.
///
/// Abstracting the filesystem allows testing exports without touching
/// the real disk.
pub trait FileSystem: Send + Sync {
    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
