//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod identifier;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::format::Interaction;
use crate::cassette::replayer::CassetteReplayer;

pub use clock::ReplayingClock;
pub use identifier::ReplayingIdentifierSource;

/// Takes the next `port::method` interaction from a shared replayer.
pub(crate) fn next_interaction(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Interaction {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method)
}

/// Decodes a recorded value, panicking with the call site on mismatch.
pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> T {
    serde_json::from_value(value)
        .unwrap_or_else(|e| panic!("{what}: recorded value has the wrong shape: {e}"))
}
