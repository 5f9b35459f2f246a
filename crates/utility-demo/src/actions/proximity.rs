//! Proximity Alert Action
//!
//! Turns the agent to its alert colour while the player is too close, and
//! puts the original colour back on exit.

use utility_core::{Action, ActionResult, ActionState};

use crate::world::{AgentColour, DemoWorld};

pub const PROXIMITY_NAME: &str = "Rendering: Swap Colour When Player Too Close";

/// Score while the player is inside the detection distance
pub const ALERT_SCORE: f32 = 3.0;

pub struct ProximityAlertAction {
    state: ActionState,
    detection_distance: f32,
    /// Colour to restore on exit, captured on enter
    original_colour: Option<AgentColour>,
}

impl ProximityAlertAction {
    pub fn new(detection_distance: f32) -> Self {
        Self {
            state: ActionState::new(PROXIMITY_NAME),
            detection_distance,
            original_colour: None,
        }
    }
}

impl Action<DemoWorld> for ProximityAlertAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn enter(&mut self, world: &mut DemoWorld) -> ActionResult<()> {
        self.original_colour = Some(world.colour);
        world.colour = AgentColour::Alert;
        Ok(())
    }

    fn exit(&mut self, world: &mut DemoWorld) -> ActionResult<()> {
        world.colour = self.original_colour.take().unwrap_or_default();
        Ok(())
    }

    fn score(&self, world: &DemoWorld) -> ActionResult<f32> {
        if world.player_distance() < self.detection_distance {
            return Ok(ALERT_SCORE);
        }
        Ok(0.0)
    }

    fn update(&mut self, _world: &mut DemoWorld) -> ActionResult<()> {
        Ok(())
    }

    fn on_reset(&mut self) {
        self.original_colour = None;
    }
}
