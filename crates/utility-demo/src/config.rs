//! Configuration System
//!
//! Loads controller and demo tuning from a TOML file so the demo can be
//! adjusted without recompiling.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use utility_core::{ConfigError, ControllerConfig, ControllerError};

/// Errors that can occur while setting up the demo.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Time step must be positive so time moves forward
    #[error("time step must be finite and > 0 seconds, got {0}")]
    InvalidTimestep(f32),
    #[error("detection distance must be finite and >= 0, got {0}")]
    InvalidDetectionDistance(f32),
}

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub demo: DemoSettings,
}

impl DemoConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, SetupError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, SetupError> {
        toml::to_string_pretty(self)
            .map_err(ConfigError::TomlSerialize)
            .map_err(SetupError::from)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        self.controller.validate()?;

        let dt = self.demo.dt;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SetupError::InvalidTimestep(dt));
        }
        let distance = self.demo.detection_distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(SetupError::InvalidDetectionDistance(distance));
        }
        Ok(())
    }
}

/// Demo world and action tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Seconds between ticks
    pub dt: f32,
    /// Player distance that triggers the alert colour
    pub detection_distance: f32,
    pub boredom_per_tick: f32,
    /// Boredom needed before wandering is allowed
    pub boredom_threshold: f32,
    pub wander_drain_per_tick: f32,
    pub wander_step: f32,
    pub player_center: f32,
    pub player_amplitude: f32,
    /// Radians per second
    pub player_speed: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            ticks: 600,
            dt: 0.1,
            detection_distance: 5.0,
            boredom_per_tick: 0.1,
            boredom_threshold: 1.0,
            wander_drain_per_tick: 0.25,
            wander_step: 0.5,
            player_center: 8.0,
            player_amplitude: 6.0,
            player_speed: 0.2,
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Utility AI demo configuration

[controller]
ignore_zero_scores = true
use_lowest_score = false
choose_randomly_if_equal = false
score_equality_tolerance = 0.1
minimum_action_duration = 0.05

[demo]
ticks = 600
dt = 0.1
detection_distance = 5.0
boredom_per_tick = 0.1
boredom_threshold = 1.0
wander_drain_per_tick = 0.25
wander_step = 0.5
player_center = 8.0
player_amplitude = 6.0
player_speed = 0.2
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_toml_parses() {
        let config = DemoConfig::from_str(&default_config_toml()).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [controller]
            minimum_action_duration = 0.5

            [demo]
            ticks = 10
        "#;

        let config = DemoConfig::from_str(toml).unwrap();

        assert_eq!(config.controller.minimum_action_duration, 0.5);
        assert_eq!(config.demo.ticks, 10);
        assert_eq!(config.demo.dt, 0.1);
        assert!(config.controller.ignore_zero_scores);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            DemoConfig::from_str("[demo]\ndt = 0.0"),
            Err(SetupError::InvalidTimestep(_))
        ));
        assert!(matches!(
            DemoConfig::from_str("[demo]\ndetection_distance = -1.0"),
            Err(SetupError::InvalidDetectionDistance(_))
        ));
        assert!(matches!(
            DemoConfig::from_str("[controller]\nminimum_action_duration = -2.0"),
            Err(SetupError::Config(ConfigError::InvalidMinimumDuration(_)))
        ));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut config = DemoConfig::default();
        config.controller.seed = Some(5);
        config.demo.ticks = 42;

        let toml = config.to_toml().unwrap();
        assert_eq!(DemoConfig::from_str(&toml).unwrap(), config);
    }
}
