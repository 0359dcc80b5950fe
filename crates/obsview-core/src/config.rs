//! Configuration for tree building

use crate::classify::ClassificationRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Price per token used when estimating cost
pub const DEFAULT_UNIT_RATE: f64 = 0.000002;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unit rate must be a finite non-negative number, got {0}")]
    InvalidUnitRate(f64),
}

/// Builder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Currency units per token (prompt and completion priced alike)
    pub unit_rate: f64,

    /// Type label classification policy
    pub rules: ClassificationRules,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self {
            unit_rate: DEFAULT_UNIT_RATE,
            rules: ClassificationRules::new(),
        }
    }

    pub fn with_unit_rate(mut self, unit_rate: f64) -> Result<Self, ConfigError> {
        self.unit_rate = unit_rate;
        self.validate()?;
        Ok(self)
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.unit_rate.is_finite() || self.unit_rate < 0.0 {
            return Err(ConfigError::InvalidUnitRate(self.unit_rate));
        }
        Ok(())
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}
