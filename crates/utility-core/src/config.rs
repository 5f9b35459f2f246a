//! Configuration loading for the controller.
//!
//! Settings can be built in code or loaded from a TOML file. Values are
//! validated on load and at controller construction; out-of-range values are
//! rejected, never clamped.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Skip actions whose score is exactly zero
    pub ignore_zero_scores: bool,
    /// Lowest score wins instead of highest
    pub use_lowest_score: bool,
    /// Break ties with a coin flip instead of keeping the earlier action
    pub choose_randomly_if_equal: bool,
    /// Scores within this distance of each other are treated as equal
    pub score_equality_tolerance: f32,
    /// Seconds an action must stay current before it can be replaced
    pub minimum_action_duration: f32,
    /// Seed for the tie-break random source (entropy when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            ignore_zero_scores: true,
            use_lowest_score: false,
            choose_randomly_if_equal: false,
            score_equality_tolerance: 0.1,
            minimum_action_duration: 0.05,
            seed: None,
        }
    }
}

impl ControllerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks value constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.score_equality_tolerance.is_finite() || self.score_equality_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.score_equality_tolerance));
        }
        if !self.minimum_action_duration.is_finite() || self.minimum_action_duration < 0.0 {
            return Err(ConfigError::InvalidMinimumDuration(
                self.minimum_action_duration,
            ));
        }
        Ok(())
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.score_equality_tolerance = tolerance;
        self
    }

    pub fn with_minimum_duration(mut self, seconds: f32) -> Self {
        self.minimum_action_duration = seconds;
        self
    }

    pub fn with_lowest_score(mut self, enabled: bool) -> Self {
        self.use_lowest_score = enabled;
        self
    }

    pub fn with_random_ties(mut self, enabled: bool) -> Self {
        self.choose_randomly_if_equal = enabled;
        self
    }

    pub fn with_ignore_zero_scores(mut self, enabled: bool) -> Self {
        self.ignore_zero_scores = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Utility AI controller configuration

# Skip actions that score exactly 0
ignore_zero_scores = true

# Lowest score wins instead of highest
use_lowest_score = false

# Flip a coin when two scores are within the tolerance
choose_randomly_if_equal = false

# Scores are considered equal within +/- this range
score_equality_tolerance = 0.1

# Seconds before the current action can be replaced
minimum_action_duration = 0.05

# seed = 42
"#
    .to_string()
}
