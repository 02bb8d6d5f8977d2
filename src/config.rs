use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::tracker::DEFAULT_CALORIE_LIMIT;

/// Environment variable that overrides the configured daily limit.
pub const LIMIT_ENV_VAR: &str = "CALORIE_TRACKER_LIMIT";

/// Tracker configuration.
///
/// Read from an optional JSON file; missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Daily calorie limit a new session starts with.
    pub calorie_limit: f64,

    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calorie_limit: DEFAULT_CALORIE_LIMIT,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env var > config file > defaults.
    ///
    /// An explicitly given path must exist; the default path is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let env_limit = std::env::var(LIMIT_ENV_VAR).ok();
        Self::load_with(
            config_path,
            &Self::default_config_path(),
            env_limit.as_deref(),
        )
    }

    /// Resolve the configuration from explicit inputs instead of the process
    /// environment.
    pub fn load_with(
        config_path: Option<&Path>,
        default_path: &Path,
        env_limit: Option<&str>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if default_path.exists() => Self::from_file(default_path)?,
            None => Self::default(),
        };

        if let Some(raw) = env_limit {
            config.calorie_limit = crate::interface::parse_limit(raw)?;
            debug!(limit = config.calorie_limit, "limit taken from environment");
        }

        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TrackerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| TrackerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Default config file path: ~/.config/calorie_tracker/config.json
    pub fn default_config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join("calorie_tracker")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!((config.calorie_limit - 2000.0).abs() < 0.001);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"calorie_limit": 1800}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!((config.calorie_limit - 1800.0).abs() < 0.001);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_from_file_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigParse { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_falls_back_to_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_with(None, &dir.path().join("config.json"), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reads_default_path_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"calorie_limit": 2200, "log_level": "debug"}"#).unwrap();

        let config = Config::load_with(None, &path, None).unwrap();
        assert!((config.calorie_limit - 2200.0).abs() < 0.001);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = Config::load_with(Some(&missing), &dir.path().join("config.json"), None)
            .unwrap_err();
        assert!(matches!(err, TrackerError::ConfigRead { .. }));
    }

    #[test]
    fn test_env_limit_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"calorie_limit": 1800}"#).unwrap();

        let config = Config::load_with(Some(file.path()), file.path(), Some("1500")).unwrap();
        assert!((config.calorie_limit - 1500.0).abs() < 0.001);
    }

    #[test]
    fn test_env_limit_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::load_with(None, &dir.path().join("config.json"), Some(" 0 ")).unwrap();
        assert_eq!(config.calorie_limit, 0.0);
    }

    #[test]
    fn test_bad_env_limit_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("config.json");
        for bad in ["abc", "", "NaN"] {
            let err = Config::load_with(None, &default_path, Some(bad)).unwrap_err();
            assert!(matches!(err, TrackerError::InvalidInput(_)), "accepted {:?}", bad);
        }
    }
}
