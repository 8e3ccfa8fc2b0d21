//! Configuration management for fizzbuzz
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.fizzbuzz/config.toml
//!
//! Only diagnostics are configurable. The printed range and divisors are not.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Verbosity;
use crate::errors::{FizzBuzzError, Result};

/// Complete configuration for fizzbuzz
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Diagnostics configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub default_verbosity: String,
}

/// Terminal display configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color_output: true }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FizzBuzzError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| FizzBuzzError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or fall back to built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// ~/.fizzbuzz/config.toml, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".fizzbuzz").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if Verbosity::from_name(&self.telemetry.default_verbosity).is_none() {
            return Err(FizzBuzzError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.telemetry.default_verbosity
            )));
        }

        Ok(())
    }

    /// Configured verbosity; `validate` guarantees the name parses
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.telemetry.default_verbosity).unwrap_or(Verbosity::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.telemetry.default_verbosity, "normal");
        assert!(config.display.color_output);
        assert_eq!(config.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.telemetry.default_verbosity = "invalid".to_string();
        assert!(matches!(config.validate(), Err(FizzBuzzError::ConfigError(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[display]\ncolor_output = false\n").unwrap();
        assert!(!config.display.color_output);
        assert_eq!(config.telemetry.default_verbosity, "normal");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry]\ndefault_verbosity = \"very_verbose\"").unwrap();

        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_load_rejects_bad_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry]\ndefault_verbosity = \"shouty\"").unwrap();

        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(missing)).is_err());
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with(".fizzbuzz/config.toml"));
        }
    }
}
