//! Copying formatted text with a degraded fallback.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::Clipboard;

/// Which clipboard path succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The system clipboard took the text.
    Primary,
    /// The system clipboard failed; the fallback took the text.
    Fallback,
}

/// Copies `text` verbatim, trying the primary path and then the fallback.
///
/// # Errors
///
/// Returns [`Error::NothingTo`] for empty text, or [`Error::Clipboard`]
/// when both paths fail.
pub fn copy_text(clipboard: &dyn Clipboard, text: &str) -> Result<CopyOutcome> {
    if text.is_empty() {
        return Err(Error::NothingTo("copy"));
    }

    let primary = match clipboard.write_primary(text) {
        Ok(()) => {
            debug!(bytes = text.len(), "copied to system clipboard");
            return Ok(CopyOutcome::Primary);
        }
        Err(e) => e,
    };
    warn!(error = %primary, "system clipboard unavailable, trying fallback");

    match clipboard.write_fallback(text) {
        Ok(()) => Ok(CopyOutcome::Fallback),
        Err(fallback) => Err(Error::Clipboard(format!("{primary}; fallback: {fallback}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    /// Clipboard whose paths succeed or fail on demand, keeping what it got.
    struct FakeClipboard {
        primary_ok: bool,
        fallback_ok: bool,
        copied: Mutex<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(primary_ok: bool, fallback_ok: bool) -> Self {
            Self { primary_ok, fallback_ok, copied: Mutex::new(Vec::new()) }
        }
    }

    impl Clipboard for FakeClipboard {
        fn write_primary(&self, text: &str) -> std::result::Result<(), BoxError> {
            if !self.primary_ok {
                return Err("denied".into());
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn write_fallback(&self, text: &str) -> std::result::Result<(), BoxError> {
            if !self.fallback_ok {
                return Err("unsupported".into());
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let clipboard = FakeClipboard::new(true, true);
        assert_eq!(copy_text(&clipboard, "a\nb").unwrap(), CopyOutcome::Primary);
        assert_eq!(*clipboard.copied.lock().unwrap(), vec!["a\nb".to_string()]);
    }

    #[test]
    fn primary_failure_uses_fallback() {
        let clipboard = FakeClipboard::new(false, true);
        assert_eq!(copy_text(&clipboard, "x").unwrap(), CopyOutcome::Fallback);
    }

    #[test]
    fn both_failing_asks_for_manual_copy() {
        let clipboard = FakeClipboard::new(false, false);
        let err = copy_text(&clipboard, "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "copy to clipboard failed, please copy manually (denied; fallback: unsupported)"
        );
    }

    #[test]
    fn empty_text_is_rejected() {
        let clipboard = FakeClipboard::new(true, true);
        assert!(matches!(copy_text(&clipboard, ""), Err(Error::NothingTo("copy"))));
        assert!(clipboard.copied.lock().unwrap().is_empty());
    }
}
