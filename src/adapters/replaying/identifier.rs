//! Replaying adapter for the `IdentifierSource` port.

use std::sync::Mutex;

use super::{decode, next_interaction};
use crate::adapters::GenerateCall;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::SourceError;
use crate::format::CanonicalUuid;
use crate::generate::UuidVersion;
use crate::ports::IdentifierSource;

/// Serves recorded identifiers and failures.
///
/// Each call is checked against the recorded arguments so a replay that
/// drifts from its recording fails loudly instead of printing stale output.
pub struct ReplayingIdentifierSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdentifierSource {
    /// Creates a source reading from `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdentifierSource for ReplayingIdentifierSource {
    fn generate(
        &self,
        version: UuidVersion,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<CanonicalUuid, SourceError> {
        let interaction = next_interaction(&self.replayer, "ids", "generate");
        let recorded: GenerateCall = decode(interaction.input, "ids::generate input");
        let requested = GenerateCall::new(version, namespace, name);
        assert_eq!(
            recorded, requested,
            "ids::generate replay diverged at seq={}",
            interaction.seq
        );
        decode(interaction.output, "ids::generate output")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::cassette::format::{Cassette, Interaction};

    fn source(interactions: Vec<Interaction>) -> ReplayingIdentifierSource {
        ReplayingIdentifierSource::new(CassetteReplayer::new(&Cassette {
            name: "ids".into(),
            recorded_at: Utc::now(),
            interactions,
        }))
    }

    fn generate(seq: u64, input: serde_json::Value, output: serde_json::Value) -> Interaction {
        Interaction { seq, port: "ids".into(), method: "generate".into(), input, output }
    }

    #[test]
    fn replays_identifiers_and_failures() {
        let source = source(vec![
            generate(
                0,
                json!({"version": "v4", "namespace": null, "name": null}),
                json!({"Ok": "f81d4fae-7dec-11d0-a765-00a0c91e6bf6"}),
            ),
            generate(
                1,
                json!({"version": "v3", "namespace": "bogus", "name": "x"}),
                json!({"Err": {"InvalidNamespace": "bogus"}}),
            ),
        ]);

        let uuid = source.generate(UuidVersion::V4, None, None).unwrap();
        assert_eq!(uuid.as_str(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");

        let err = source.generate(UuidVersion::V3, Some("bogus"), Some("x")).unwrap_err();
        assert_eq!(err, SourceError::InvalidNamespace("bogus".into()));
    }

    #[test]
    #[should_panic(expected = "replay diverged")]
    fn diverging_call_panics() {
        let source = source(vec![generate(
            0,
            json!({"version": "v4", "namespace": null, "name": null}),
            json!({"Ok": "f81d4fae-7dec-11d0-a765-00a0c91e6bf6"}),
        )]);
        let _ = source.generate(UuidVersion::V7, None, None);
    }
}
