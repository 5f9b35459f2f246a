//! Idle Action
//!
//! Fallback behaviour with a constant score. The agent gets bored while
//! idling.

use utility_core::{Action, ActionResult, ActionState};

use crate::world::DemoWorld;

pub const IDLE_NAME: &str = "Generic: Idle";

/// Constant score of the idle action
pub const IDLE_SCORE: f32 = 1.0;

pub struct IdleAction {
    state: ActionState,
    boredom_per_tick: f32,
}

impl IdleAction {
    pub fn new(boredom_per_tick: f32) -> Self {
        Self {
            state: ActionState::new(IDLE_NAME),
            boredom_per_tick,
        }
    }
}

impl Action<DemoWorld> for IdleAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn enter(&mut self, _world: &mut DemoWorld) -> ActionResult<()> {
        Ok(())
    }

    fn exit(&mut self, _world: &mut DemoWorld) -> ActionResult<()> {
        Ok(())
    }

    fn score(&self, _world: &DemoWorld) -> ActionResult<f32> {
        Ok(IDLE_SCORE)
    }

    fn update(&mut self, world: &mut DemoWorld) -> ActionResult<()> {
        world.boredom += self.boredom_per_tick;
        Ok(())
    }
}
