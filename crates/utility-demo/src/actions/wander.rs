//! Wander Action
//!
//! Once the agent is bored enough it paces back and forth until the boredom
//! is gone. Completion is reported through the score dropping to zero.

use utility_core::{Action, ActionResult, ActionState};

use crate::world::DemoWorld;

pub const WANDER_NAME: &str = "Generic: Wander";

/// Score while there is boredom left to work off
pub const WANDER_SCORE: f32 = 2.0;

/// Furthest the agent paces from the origin
const WANDER_RADIUS: f32 = 2.0;

pub struct WanderAction {
    state: ActionState,
    boredom_threshold: f32,
    drain_per_tick: f32,
    step: f32,
    /// Set on enter so the action keeps running below the threshold
    wandering: bool,
    steps_taken: u32,
}

impl WanderAction {
    pub fn new(boredom_threshold: f32, drain_per_tick: f32, step: f32) -> Self {
        Self {
            state: ActionState::new(WANDER_NAME),
            boredom_threshold,
            drain_per_tick,
            step,
            wandering: false,
            steps_taken: 0,
        }
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }
}

impl Action<DemoWorld> for WanderAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn enter(&mut self, _world: &mut DemoWorld) -> ActionResult<()> {
        self.wandering = true;
        Ok(())
    }

    fn exit(&mut self, _world: &mut DemoWorld) -> ActionResult<()> {
        self.wandering = false;
        Ok(())
    }

    fn can_run(&self, world: &DemoWorld) -> ActionResult<bool> {
        Ok(self.wandering || world.boredom >= self.boredom_threshold)
    }

    fn score(&self, world: &DemoWorld) -> ActionResult<f32> {
        if world.boredom > 0.0 {
            return Ok(WANDER_SCORE);
        }
        Ok(0.0)
    }

    fn update(&mut self, world: &mut DemoWorld) -> ActionResult<()> {
        let next = world.agent.x + self.step * world.heading;
        if next.abs() > WANDER_RADIUS {
            world.heading = -world.heading;
        }
        world.agent.x += self.step * world.heading;
        world.boredom = (world.boredom - self.drain_per_tick).max(0.0);
        self.steps_taken += 1;
        Ok(())
    }

    fn on_reset(&mut self) {
        self.wandering = false;
        self.steps_taken = 0;
    }
}
