//! Recording adapter for the `IdentifierSource` port.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::adapters::GenerateCall;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::SourceError;
use crate::format::CanonicalUuid;
use crate::generate::UuidVersion;
use crate::ports::IdentifierSource;

/// Records every generation, failures included, of the wrapped source.
pub struct RecordingIdentifierSource {
    inner: Box<dyn IdentifierSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIdentifierSource {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn IdentifierSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl IdentifierSource for RecordingIdentifierSource {
    fn generate(
        &self,
        version: UuidVersion,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> Result<CanonicalUuid, SourceError> {
        let result = self.inner.generate(version, namespace, name);
        let call = GenerateCall::new(version, namespace, name);
        record_interaction(&self.recorder, "ids", "generate", &call, &result);
        result
    }
}
