//! Controller Event Types
//!
//! Discrete notification points fired by the controller during a tick.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification point fired by the controller.
///
/// Within a single tick the kinds are emitted in a fixed order:
/// `Updated`, `PreCompute`, then either `Found` or `NotFound`, followed by
/// `Ended`, `Entered` and `Changed` when a swap happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The current action (if any) has been updated
    Updated,
    /// Scores are about to be computed
    PreCompute,
    /// Evaluation produced a best candidate
    Found,
    /// Every action was ineligible or suppressed
    NotFound,
    /// The current action changed (including to no action)
    Changed,
    /// An action became current and was entered
    Entered,
    /// The previous current action was exited and reset
    Ended,
    /// The controller was stopped
    Stopped,
    /// The controller was restarted
    Restarted,
    /// An action method returned an error and the action was killed
    Faulted,
}

impl EventKind {
    /// Returns the snake_case name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Updated => "updated",
            EventKind::PreCompute => "pre_compute",
            EventKind::Found => "found",
            EventKind::NotFound => "not_found",
            EventKind::Changed => "changed",
            EventKind::Entered => "entered",
            EventKind::Ended => "ended",
            EventKind::Stopped => "stopped",
            EventKind::Restarted => "restarted",
            EventKind::Faulted => "faulted",
        }
    }

    /// Returns true for events that mark a change of the current action.
    pub fn is_selection_change(&self) -> bool {
        matches!(self, EventKind::Changed | EventKind::Entered | EventKind::Ended)
    }

    /// Returns all event kind variants.
    pub fn all() -> &'static [EventKind] {
        &[
            EventKind::Updated,
            EventKind::PreCompute,
            EventKind::Found,
            EventKind::NotFound,
            EventKind::Changed,
            EventKind::Entered,
            EventKind::Ended,
            EventKind::Stopped,
            EventKind::Restarted,
            EventKind::Faulted,
        ]
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notification delivered to observers.
///
/// Observers only ever see this immutable record, never the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerEvent {
    /// Controller tick counter when the event fired
    pub tick: u64,
    /// Host time in seconds passed to the tick (or to stop/restart)
    pub time: f32,
    /// Which notification point fired
    pub kind: EventKind,
    /// Name of the action the event concerns, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ControllerEvent {
    /// Creates an event that does not concern a specific action.
    pub fn new(tick: u64, time: f32, kind: EventKind) -> Self {
        Self {
            tick,
            time,
            kind,
            action: None,
        }
    }

    /// Attaches the related action name.
    pub fn with_action(mut self, name: impl Into<String>) -> Self {
        self.action = Some(name.into());
        self
    }

    /// Serializes the event as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses an event from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
