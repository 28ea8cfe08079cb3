//! TOML run configuration.
//!
//! ```toml
//! [parameters]
//! fair_price = 40.0
//! pump_step = 1.0
//! ```
//!
//! Keys left out fall back to `SimulationParameters::default()`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use washlab_core::{SimulationError, SimulationParameters};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] SimulationError),
}

/// Serializable configuration for a single run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub parameters: SimulationParameters,
}

impl SimulationConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    ///
    /// Values must pass both the structural checks and the slider ranges.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.parameters.validate()?;
        config.parameters.check_ranges()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config with a short header, creating parent directories.
    pub fn write_file(&self, path: &Path) -> Result<(), ConfigError> {
        let body = self.to_toml()?;
        let content = format!(
            "# WashLab run configuration.\n# Omitted parameters use their defaults.\n\n{body}"
        );
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = SimulationConfig::from_toml("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn partial_parameters_fill_defaults() {
        let config = SimulationConfig::from_toml(
            r#"
[parameters]
fair_price = 60.0
pump_step = 2.5
"#,
        )
        .unwrap();
        assert_eq!(config.parameters.fair_price, 60.0);
        assert_eq!(config.parameters.pump_step, 2.5);
        assert_eq!(config.parameters.algo_bid, 20.0);
    }

    #[test]
    fn zero_step_rejected() {
        let err = SimulationConfig::from_toml("[parameters]\npump_step = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn out_of_range_rejected() {
        let err = SimulationConfig::from_toml("[parameters]\nfair_price = 500.0\n").unwrap_err();
        assert!(err.to_string().contains("fair_price"));
    }

    #[test]
    fn malformed_toml_rejected() {
        let err = SimulationConfig::from_toml("[parameters\nfair_price = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = SimulationConfig::default();
        config.parameters.normal_buyer_size = 75.0;
        let text = config.to_toml().unwrap();
        assert_eq!(SimulationConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimulationConfig::from_file(Path::new("/nonexistent/washlab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
