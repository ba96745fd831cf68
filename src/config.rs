//! Runtime configuration.
//!
//! Resolved once at startup from the process environment (after loading an
//! optional `.env` file) and then passed down, so commands never read
//! environment variables themselves.

use std::path::PathBuf;

/// Directory exports are written to.
pub const EXPORT_DIR_VAR: &str = "UUIDKIT_EXPORT_DIR";
/// `tracing` filter directive.
pub const LOG_VAR: &str = "UUIDKIT_LOG";
/// Cassette file to record port interactions into.
pub const RECORD_VAR: &str = "UUIDKIT_RECORD";
/// Cassette file to replay port interactions from.
pub const REPLAY_VAR: &str = "UUIDKIT_REPLAY";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where `download` writes export files.
    pub export_dir: PathBuf,
    /// Filter directive for the log subscriber.
    pub log_filter: String,
    /// Record identifier and clock calls to this cassette.
    pub record: Option<PathBuf>,
    /// Serve identifier and clock calls from this cassette.
    pub replay: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            record: None,
            replay: None,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            export_dir: get(EXPORT_DIR_VAR).map_or(defaults.export_dir, PathBuf::from),
            log_filter: get(LOG_VAR).unwrap_or(defaults.log_filter),
            record: get(RECORD_VAR).map(PathBuf::from),
            replay: get(REPLAY_VAR).map(PathBuf::from),
        }
    }

    /// Rejects settings that cannot be honoured together.
    ///
    /// # Errors
    ///
    /// Returns an error if both recording and replaying are requested.
    pub fn validate(&self) -> Result<(), String> {
        if self.record.is_some() && self.replay.is_some() {
            return Err(format!("{RECORD_VAR} and {REPLAY_VAR} cannot both be set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(from_pairs(&[]), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            (EXPORT_DIR_VAR, "/tmp/out"),
            (LOG_VAR, "uuidkit=debug"),
            (REPLAY_VAR, "run.cassette.yaml"),
        ]);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.log_filter, "uuidkit=debug");
        assert_eq!(config.replay, Some(PathBuf::from("run.cassette.yaml")));
        assert!(config.record.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_values_are_unset() {
        let config = from_pairs(&[(EXPORT_DIR_VAR, "  "), (RECORD_VAR, "")]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn record_and_replay_conflict() {
        let config = from_pairs(&[(RECORD_VAR, "a.yaml"), (REPLAY_VAR, "b.yaml")]);
        assert!(config.validate().unwrap_err().contains("cannot both be set"));
    }
}
