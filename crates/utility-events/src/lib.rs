//! Shared event and snapshot types for the utility AI controller.
//!
//! This crate contains pure data structures with no decision logic.
//! Observers, loggers and debug overlays depend on it without pulling in the
//! controller itself.

pub mod event;
pub mod snapshot;

// Re-export event types
pub use event::{ControllerEvent, EventKind};

// Re-export snapshot types
pub use snapshot::{ActionSnapshot, ControllerSnapshot, RunState};
