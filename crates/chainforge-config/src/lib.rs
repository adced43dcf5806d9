//! Configuration system for ChainForge.
//!
//! Load build configuration from TOML or YAML files to control termination,
//! the pathfinder search bound and the input generator without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use chainforge_config::ChainConfig;
//! use std::time::Duration;
//!
//! let config = ChainConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!
//!     [pathfinder]
//!     max_expansions = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.pathfinder.max_expansions, 5000);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use chainforge_config::ChainConfig;
//!
//! let config = ChainConfig::load("chainforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use chainforge_core::ChainForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on residual paths the pathfinder enqueues per estimate.
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Default number of targets written by the generator.
pub const DEFAULT_GENERATOR_COUNT: usize = 1000;

/// Default offset every generated target is built on.
pub const DEFAULT_GENERATOR_BASE: u64 = 1_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ChainForgeError {
    fn from(err: ConfigError) -> Self {
        ChainForgeError::Config(err.to_string())
    }
}

/// Main build configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ChainConfig {
    /// Random seed for reproducible generated inputs.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Residual pathfinder configuration.
    #[serde(default)]
    pub pathfinder: PathfinderConfig,

    /// Input generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl ChainConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination step limit.
    pub fn with_step_count_limit(mut self, steps: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(steps),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the pathfinder expansion bound.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.pathfinder.max_expansions = max_expansions;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pathfinder.max_expansions == 0 {
            return Err(ConfigError::Invalid(
                "pathfinder.max_expansions must be at least 1".to_string(),
            ));
        }
        if self.generator.base == 0 {
            return Err(ConfigError::Invalid(
                "generator.base must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend building.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend building.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum number of committed actions.
    pub step_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let seconds =
            self.seconds_spent_limit.unwrap_or(0) + self.minutes_spent_limit.unwrap_or(0) * 60;
        if seconds > 0 {
            Some(Duration::from_secs(seconds))
        } else {
            None
        }
    }
}

/// Residual pathfinder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PathfinderConfig {
    /// Residual paths enqueued before the search stops growing.
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

fn default_max_expansions() -> usize {
    DEFAULT_MAX_EXPANSIONS
}

/// Input generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Number of targets to write.
    #[serde(default = "default_generator_count")]
    pub count: usize,

    /// Offset added to every generated target.
    #[serde(default = "default_generator_base")]
    pub base: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_GENERATOR_COUNT,
            base: DEFAULT_GENERATOR_BASE,
        }
    }
}

fn default_generator_count() -> usize {
    DEFAULT_GENERATOR_COUNT
}

fn default_generator_base() -> u64 {
    DEFAULT_GENERATOR_BASE
}
