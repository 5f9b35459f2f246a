//! Utility AI: per-agent action selection with hysteresis.
//!
//! Each tick a [`Controller`] asks every registered [`Action`] whether it can
//! run and what it is worth, keeps the best one current, and refuses to swap
//! again until a minimum duration has passed. Near-equal scores are resolved
//! by a tolerance band and an optional seeded coin flip.
//!
//! # Modules
//!
//! - [`action`]: the action contract and per-action bookkeeping
//! - [`comparator`]: score comparison and tie-breaking
//! - [`config`]: controller configuration and TOML loading
//! - [`controller`]: the selection loop and swap protocol
//! - [`observer`]: event observers
//! - [`debug`]: debug overlay text rendering
//! - [`error`]: error types

pub mod action;
pub mod comparator;
pub mod config;
pub mod controller;
pub mod debug;
pub mod error;
pub mod observer;

pub use action::{Action, ActionState};
pub use comparator::{ScoreOrder, SelectionPolicy};
pub use config::{default_config_toml, ControllerConfig};
pub use controller::Controller;
pub use debug::DebugOverlay;
pub use error::{ActionError, ActionResult, ConfigError, ControllerError};
pub use observer::{EventObserver, EventRecorder, TracingObserver};

// Re-export the shared event types so hosts need a single dependency
pub use utility_events::{
    ActionSnapshot, ControllerEvent, ControllerSnapshot, EventKind, RunState,
};
