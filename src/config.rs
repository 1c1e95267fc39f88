use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or checking a configuration file. The only
/// `Result`-surfaced failures in the crate; every validation and
/// inference operation resolves to a value instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Thresholds applied by test-case structure validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureLimits {
    /// Smallest accepted time limit, in milliseconds
    #[serde(default = "default_min_time_limit_ms")]
    pub min_time_limit_ms: i64,

    /// Smallest accepted memory limit, in kilobytes
    #[serde(default = "default_min_memory_limit_kb")]
    pub min_memory_limit_kb: i64,

    /// Recommended weight range; outside it is a warning, not an error
    #[serde(default = "default_min_weight")]
    pub min_weight: f64,

    #[serde(default = "default_max_weight")]
    pub max_weight: f64,

    /// Fewest records a submission batch may carry
    #[serde(default = "default_min_test_cases")]
    pub min_test_cases: usize,
}

impl Default for StructureLimits {
    fn default() -> Self {
        Self {
            min_time_limit_ms: default_min_time_limit_ms(),
            min_memory_limit_kb: default_min_memory_limit_kb(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
            min_test_cases: default_min_test_cases(),
        }
    }
}

fn default_min_time_limit_ms() -> i64 {
    100
}

fn default_min_memory_limit_kb() -> i64 {
    1024
}

fn default_min_weight() -> f64 {
    0.1
}

fn default_max_weight() -> f64 {
    10.0
}

fn default_min_test_cases() -> usize {
    2
}

/// Extension rows for the topic classifier: topic name to the keywords
/// that imply it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopicsConfig {
    #[serde(default)]
    pub extra_keywords: HashMap<String, Vec<String>>,
}

/// Optional configuration. Everything defaults; a config file only needs
/// the fields it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CaselintConfig {
    #[serde(default)]
    pub topics: TopicsConfig,

    #[serde(default)]
    pub limits: StructureLimits,
}

impl CaselintConfig {
    /// Parse a TOML document and check its invariants.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.limits.min_weight > self.limits.max_weight {
            return Err(ConfigError::Invalid(format!(
                "min_weight {} exceeds max_weight {}",
                self.limits.min_weight, self.limits.max_weight
            )));
        }
        if self.limits.min_test_cases == 0 {
            return Err(ConfigError::Invalid(
                "min_test_cases must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
