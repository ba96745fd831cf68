//! YAML cassettes of recorded port interactions.
//!
//! Setting `UUIDKIT_RECORD=<file>` captures every identifier and clock call
//! of a run; `UUIDKIT_REPLAY=<file>` serves them back, which makes output
//! that normally depends on randomness or time reproducible.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
