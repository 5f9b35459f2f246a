//! Utility AI demo: one agent, three actions, a scripted player.
//!
//! Public API for the demo so integration tests can drive it without the
//! binary.

pub mod actions;
pub mod config;
pub mod logger;
pub mod sim;
pub mod world;

pub use config::{default_config_toml, DemoConfig, DemoSettings, SetupError};
pub use logger::EventLogger;
pub use sim::{RunSummary, Simulation};
pub use world::{AgentColour, DemoWorld, PlayerPath, Position};
