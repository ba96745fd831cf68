//! Clipboard port for copying text out of the tool.

/// Copies text to the user's clipboard.
///
/// Two paths are exposed so the caller can report which one succeeded:
/// a primary system clipboard and a degraded fallback.
pub trait Clipboard: Send + Sync {
    /// Writes `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable or the write fails.
    fn write_primary(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Writes `text` through the degraded path.
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback is unavailable as well.
    fn write_fallback(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
