//! Demo World
//!
//! The context every demo action reads and mutates: one agent standing near
//! the origin and a player walking a fixed back-and-forth path past it.

use serde::{Deserialize, Serialize};

use crate::config::DemoSettings;

/// A point on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Colour the agent is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentColour {
    #[default]
    Normal,
    Alert,
}

/// Scripted player movement: a cosine sweep along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPath {
    /// Midpoint of the sweep
    pub center: f32,
    /// Half the sweep length
    pub amplitude: f32,
    /// Angular speed in radians per second
    pub speed: f32,
}

impl PlayerPath {
    pub fn position_at(&self, time: f32) -> Position {
        Position::new(self.center + self.amplitude * (time * self.speed).cos(), 0.0)
    }
}

/// Host context for the demo controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoWorld {
    pub agent: Position,
    pub player: Position,
    pub colour: AgentColour,
    /// Grows while idling, drained by wandering
    pub boredom: f32,
    /// +1.0 or -1.0, the direction of the next wander step
    pub heading: f32,
    pub path: PlayerPath,
}

impl DemoWorld {
    pub fn new(settings: &DemoSettings) -> Self {
        let path = PlayerPath {
            center: settings.player_center,
            amplitude: settings.player_amplitude,
            speed: settings.player_speed,
        };

        Self {
            agent: Position::default(),
            player: path.position_at(0.0),
            colour: AgentColour::Normal,
            boredom: 0.0,
            heading: 1.0,
            path,
        }
    }

    /// Moves the player to where the script puts it at `time`.
    pub fn advance(&mut self, time: f32) {
        self.player = self.path.position_at(time);
    }

    pub fn player_distance(&self) -> f32 {
        self.agent.distance(&self.player)
    }
}
