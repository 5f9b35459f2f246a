//! Controller Snapshots
//!
//! Read-only views of a controller's state, used by debug overlays and
//! written alongside event logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Run state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Constructed, actions may still be registered
    #[default]
    Idle,
    /// Evaluating every tick
    Running,
    /// Explicitly stopped, no evaluation until restart
    Stopped,
}

impl RunState {
    /// Returns true if ticks perform evaluation in this state.
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running => write!(f, "running"),
            RunState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Per-action state as of the last evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSnapshot {
    pub name: String,
    pub last_score: f32,
    pub last_can_run: bool,
    pub is_dead: bool,
    pub is_current: bool,
}

/// Complete view of a controller between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    /// Number of evaluated ticks so far
    pub tick: u64,
    pub run_state: RunState,
    /// Name of the current action, if any
    pub current_action: Option<String>,
    /// Last computed score of the current action (0 with no current action)
    pub current_score: f32,
    /// Host time of the last selection change
    pub time_of_last_change: f32,
    /// Actions in registration order
    pub actions: Vec<ActionSnapshot>,
}

impl ControllerSnapshot {
    /// Finds an action by name.
    pub fn find_action(&self, name: &str) -> Option<&ActionSnapshot> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
