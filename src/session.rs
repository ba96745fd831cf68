//! Interactive session state.
//!
//! A [`Session`] owns the current single identifier, the active generation
//! and formatting options, and the last batch. Formatting changes re-render
//! the stored identifier; only [`Session::refresh`] and
//! [`Session::set_version`] ask the source for a new one. Failed operations
//! leave the previous identifier and batch in place.

use crate::error::Result;
use crate::format::{format, CanonicalUuid, FormatOptions, Hyphens, LetterCase, OutputFormat};
use crate::generate::{generate_batch, generate_one, BatchResult, GenerationRequest, UuidVersion};
use crate::ports::IdentifierSource;

/// State for one generator instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    version: UuidVersion,
    namespace: Option<String>,
    name: Option<String>,
    options: FormatOptions,
    current: Option<CanonicalUuid>,
    batch: Option<BatchResult>,
}

impl Session {
    /// A session with no identifier generated yet.
    #[must_use]
    pub fn new(version: UuidVersion, options: FormatOptions) -> Self {
        Self { version, options, ..Self::default() }
    }

    /// Active version.
    #[must_use]
    pub fn version(&self) -> UuidVersion {
        self.version
    }

    /// Active formatting options.
    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// The stored identifier in canonical form.
    #[must_use]
    pub fn current(&self) -> Option<&CanonicalUuid> {
        self.current.as_ref()
    }

    /// The stored identifier rendered with the active options.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.current.as_ref().map(|uuid| format(uuid, self.options))
    }

    /// The last batch, if any.
    #[must_use]
    pub fn batch(&self) -> Option<&BatchResult> {
        self.batch.as_ref()
    }

    /// Replaces the stored identifier with a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the generation error; the previous identifier is kept.
    pub fn refresh(&mut self, source: &dyn IdentifierSource) -> Result<&CanonicalUuid> {
        let uuid =
            generate_one(source, self.version, self.namespace.as_deref(), self.name.as_deref())?;
        Ok(&*self.current.insert(uuid))
    }

    /// Switches version and regenerates.
    ///
    /// # Errors
    ///
    /// Returns the generation error; the version still changes.
    pub fn set_version(
        &mut self,
        version: UuidVersion,
        source: &dyn IdentifierSource,
    ) -> Result<&CanonicalUuid> {
        self.version = version;
        self.refresh(source)
    }

    /// Sets or clears the namespace used by name-based versions.
    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    /// Sets or clears the name used by name-based versions.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Changes the output encoding.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.options.format = format;
    }

    /// Changes the letter case.
    pub fn set_case(&mut self, case: LetterCase) {
        self.options.case = case;
    }

    /// Changes hyphen handling.
    pub fn set_hyphens(&mut self, hyphens: Hyphens) {
        self.options.hyphens = hyphens;
    }

    /// Generates a batch with the active settings and stores it.
    ///
    /// # Errors
    ///
    /// Returns the validation or generation error; the previous batch is kept.
    pub fn run_batch(&mut self, source: &dyn IdentifierSource, count: i64) -> Result<&BatchResult> {
        let request = GenerationRequest {
            version: self.version,
            count,
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        };
        let batch = generate_batch(source, &request, self.options)?;
        Ok(&*self.batch.insert(batch))
    }

    /// Discards the stored batch.
    pub fn clear_batch(&mut self) {
        self.batch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generate::testing::ScriptedSource;

    #[test]
    fn format_changes_rerender_without_regenerating() {
        let source = ScriptedSource::default();
        let mut session = Session::new(UuidVersion::V4, FormatOptions::default());
        session.refresh(&source).unwrap();
        assert_eq!(session.display().unwrap(), "00000000-0000-0000-0000-000000000001");

        session.set_hyphens(Hyphens::Remove);
        assert_eq!(session.display().unwrap(), "00000000000000000000000000000001");
        session.set_format(OutputFormat::Binary);
        assert_eq!(session.display().unwrap(), "1");
        session.set_case(LetterCase::Upper);
        session.set_format(OutputFormat::Base64);
        assert_eq!(session.display().unwrap(), "AAAAAAAAAAAAAAAAAAAAAQ==");

        assert_eq!(source.calls().len(), 1);
    }

    #[test]
    fn version_change_replaces_identifier() {
        let source = ScriptedSource::default();
        let mut session = Session::default();
        session.refresh(&source).unwrap();
        session.set_version(UuidVersion::V5, &source).unwrap();

        assert_eq!(session.version(), UuidVersion::V5);
        assert_eq!(session.current().unwrap().as_str(), "916180a7-0b43-5c08-b3c8-c738826880bb");
    }

    #[test]
    fn name_input_feeds_name_based_generation() {
        let source = ScriptedSource::default();
        let mut session = Session::new(UuidVersion::V5, FormatOptions::default());
        session.set_namespace(Some("not-a-uuid".into()));
        session.set_name(Some("x".into()));
        session.refresh(&source).unwrap();
        assert_eq!(session.current().unwrap().as_str(), "10927d06-1f0c-5427-87ff-8a2b17b9ba0c");
    }

    #[test]
    fn failed_refresh_keeps_previous_identifier() {
        let source = ScriptedSource::failing_at(1);
        let mut session = Session::default();
        let first = session.refresh(&source).unwrap().clone();

        assert!(session.refresh(&source).is_err());
        assert_eq!(session.current(), Some(&first));
    }

    #[test]
    fn failed_batch_keeps_previous_batch() {
        let source = ScriptedSource::default();
        let mut session = Session::default();
        session.run_batch(&source, 2).unwrap();

        let err = session.run_batch(&source, 0).unwrap_err();
        assert!(matches!(err, Error::CountOutOfRange(0)));
        assert_eq!(session.batch().unwrap().entries().len(), 2);

        session.clear_batch();
        assert!(session.batch().is_none());
    }

    #[test]
    fn batch_uses_options_active_at_generation() {
        let source = ScriptedSource::default();
        let mut session = Session::default();
        session.set_format(OutputFormat::Hex);
        session.run_batch(&source, 1).unwrap();
        session.set_format(OutputFormat::String);

        assert_eq!(session.batch().unwrap().entries(), ["00000000000000000000000000000001"]);
    }
}
