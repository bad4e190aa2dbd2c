//! Settings for formforge.
//!
//! Provides the [`Settings`] struct holding all service configuration with
//! sensible defaults, loadable from a TOML file.

use serde::{Deserialize, Serialize};

use crate::error::{FormForgeError, FormForgeResult};

/// Database configuration.
///
/// The engine is either `"sqlite"` (with `name` as the file path) or
/// `"memory"` for the in-process store used in development and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// The backend engine: `"sqlite"` or `"memory"`.
    pub engine: String,
    /// The database file path (ignored by the memory engine).
    pub name: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            engine: "sqlite".to_string(),
            name: "formforge.sqlite3".to_string(),
        }
    }
}

/// Service-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debug mode: pretty logs, verbose errors.
    pub debug: bool,
    /// Log filter directive (e.g. `"info"`, `"formforge=debug"`).
    pub log_level: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Secret key for signing auth tokens.
    pub secret_key: String,
    /// Database configuration.
    pub database: DatabaseSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
            bind_addr: "127.0.0.1:8000".to_string(),
            secret_key: String::new(),
            database: DatabaseSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML document.
    pub fn from_toml_str(raw: &str) -> FormForgeResult<Self> {
        toml::from_str(raw).map_err(|e| FormForgeError::ConfigurationError(e.to_string()))
    }

    /// Loads settings from a TOML file on disk.
    pub fn from_toml_file(path: &std::path::Path) -> FormForgeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            FormForgeError::ConfigurationError(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks the settings for values that would make the service unusable.
    pub fn validate(&self) -> FormForgeResult<()> {
        if self.secret_key.is_empty() {
            return Err(FormForgeError::ConfigurationError(
                "secret_key must be set".to_string(),
            ));
        }
        match self.database.engine.as_str() {
            "sqlite" | "memory" => Ok(()),
            other => Err(FormForgeError::ConfigurationError(format!(
                "unknown database engine: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.debug);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.bind_addr, "127.0.0.1:8000");
        assert_eq!(s.database.engine, "sqlite");
    }

    #[test]
    fn test_from_toml_partial() {
        let s = Settings::from_toml_str(
            r#"
            debug = true
            secret_key = "s3cret"

            [database]
            engine = "memory"
            "#,
        )
        .unwrap();
        assert!(s.debug);
        assert_eq!(s.secret_key, "s3cret");
        assert_eq!(s.database.engine, "memory");
        // Unspecified values fall back to defaults.
        assert_eq!(s.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(Settings::from_toml_str("debug = \"not a bool\"").is_err());
    }

    #[test]
    fn test_validate_requires_secret() {
        let s = Settings::default();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_engine() {
        let mut s = Settings::default();
        s.secret_key = "k".into();
        s.database.engine = "oracle".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_memory() {
        let mut s = Settings::default();
        s.secret_key = "k".into();
        s.database.engine = "memory".into();
        assert!(s.validate().is_ok());
    }
}
