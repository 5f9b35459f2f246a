//! Error types for configuration, controller operations and action bodies.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error serializing config back to TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// Tolerance was negative or not a finite number
    #[error("score equality tolerance must be finite and >= 0, got {0}")]
    InvalidTolerance(f32),
    /// Minimum action duration was negative or not a finite number
    #[error("minimum action duration must be finite and >= 0 seconds, got {0}")]
    InvalidMinimumDuration(f32),
}

/// Errors returned by controller operations.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Start or restart was requested with nothing to evaluate
    #[error("controller has no registered actions")]
    NoActions,
    /// Registration attempted after the controller left the idle state
    #[error("actions can only be registered while the controller is idle")]
    RegistrationClosed,
    #[error("an action named '{0}' is already registered")]
    DuplicateAction(String),
    #[error("no action named '{0}' is registered")]
    UnknownAction(String),
}

/// Failure reported by an action body.
///
/// The controller never propagates these out of a tick. The failing action is
/// killed and evaluation carries on with the remaining actions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("action '{action}' failed: {reason}")]
    Failed { action: String, reason: String },
}

impl ActionError {
    /// Creates a failure for the named action.
    pub fn failed(action: impl Into<String>, reason: impl Into<String>) -> Self {
        ActionError::Failed {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

/// Result type returned by fallible action methods.
pub type ActionResult<T> = Result<T, ActionError>;
