//! Runtime configuration for clinic front-ends.
//!
//! # Responsibility
//! - Describe where the store lives and how logging is set up.
//! - Load settings from an optional TOML file.
//!
//! # Invariants
//! - Unknown keys are rejected so typos do not silently fall back to defaults.
//! - `log_level`, when present, is one of the levels accepted by `init_logging`.
//! - No credential is ever part of the persisted configuration.

use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = "clinic.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    /// SQLite database file. Created on first open.
    pub database_path: PathBuf,
    /// Log level; falls back to `default_log_level()`.
    pub log_level: Option<String>,
    /// Directory for rolling log files. File logging is off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: None,
            log_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidLogLevel(level) => write!(f, "invalid config: unknown log_level `{level}`"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLogLevel(_) => None,
        }
    }
}

impl ClinicConfig {
    /// Parses TOML text; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that TOML typing alone cannot, e.g. after flag overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }
        Ok(())
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Effective log level.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClinicConfig, ConfigError, DEFAULT_DB_FILE_NAME};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ClinicConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
    }

    #[test]
    fn missing_log_level_falls_back_to_build_default() {
        let config = ClinicConfig::from_toml_str("log_dir = \"/var/log/clinic\"").unwrap();
        assert_eq!(config.log_level, None);
        assert_eq!(config.log_level(), default_log_level());
    }

    #[test]
    fn validate_rejects_overridden_log_level() {
        let config = ClinicConfig {
            log_level: Some("loud".to_string()),
            ..ClinicConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn parses_all_keys() {
        let config = ClinicConfig::from_toml_str(
            r#"
            database_path = "/var/lib/clinic/records.sqlite3"
            log_level = "warn"
            log_dir = "/var/log/clinic"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/clinic/records.sqlite3")
        );
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/clinic")));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ClinicConfig::from_toml_str("password = \"hunter2\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = ClinicConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClinicConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
