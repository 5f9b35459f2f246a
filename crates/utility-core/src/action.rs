//! Action Contract
//!
//! An action is one candidate behaviour attached to an agent. The controller
//! scores every registered action each tick and drives exactly one of them.
//!
//! Actions never swap themselves. An action that has finished its work says
//! so through its score (returning 0) or through `can_run` (returning false),
//! and the controller takes care of `exit` and `reset`.

use crate::error::ActionResult;

/// Bookkeeping shared by every action: name, dead flag and the results of
/// the most recent evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState {
    name: String,
    dead: bool,
    last_score: f32,
    last_can_run: bool,
}

impl ActionState {
    /// Creates the state for a freshly constructed, alive action.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dead: false,
            last_score: 0.0,
            last_can_run: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Marks the action dead. Dead actions are skipped until reset.
    pub fn kill(&mut self) {
        self.dead = true;
    }

    /// Clears the dead flag.
    pub fn revive(&mut self) {
        self.dead = false;
    }

    /// Score stored by the last evaluation pass.
    pub fn last_score(&self) -> f32 {
        self.last_score
    }

    /// Eligibility stored by the last evaluation pass.
    pub fn last_can_run(&self) -> bool {
        self.last_can_run
    }

    /// Stores the score and returns it.
    pub fn set_last_score(&mut self, score: f32) -> f32 {
        self.last_score = score;
        score
    }

    /// Stores the eligibility and returns it.
    pub fn set_last_can_run(&mut self, can_run: bool) -> bool {
        self.last_can_run = can_run;
        can_run
    }
}

/// A candidate behaviour evaluated by a [`Controller`](crate::Controller).
///
/// `C` is the host context handed to every call that needs the outside
/// world: the agent, its surroundings, a renderer. Scoring only gets a shared
/// reference; lifecycle methods and `update` may mutate it.
///
/// Lifecycle guarantees made by the controller:
/// - `enter` is called once when the action becomes current, and never again
///   before an `exit` followed by `reset`.
/// - `update` is called once per tick, only while the action is current.
/// - `exit` is always followed immediately by `reset`.
/// - `score` is only called when the action is alive and `can_run` said yes.
pub trait Action<C> {
    fn state(&self) -> &ActionState;

    fn state_mut(&mut self) -> &mut ActionState;

    /// Called the first tick this action is current.
    fn enter(&mut self, ctx: &mut C) -> ActionResult<()>;

    /// Called when the controller swaps away from this action.
    fn exit(&mut self, ctx: &mut C) -> ActionResult<()>;

    /// Cheap eligibility check, lets an action skip a costly `score`.
    fn can_run(&self, _ctx: &C) -> ActionResult<bool> {
        Ok(true)
    }

    /// Utility of this action for the current tick.
    fn score(&self, ctx: &C) -> ActionResult<f32>;

    /// Advances the action while it is current.
    fn update(&mut self, ctx: &mut C) -> ActionResult<()>;

    /// Clears behaviour-specific state. Called by [`Action::reset`].
    fn on_reset(&mut self) {}

    /// Re-enables the action and returns it to a never-run state.
    fn reset(&mut self) {
        self.state_mut().revive();
        self.on_reset();
    }

    fn name(&self) -> &str {
        self.state().name()
    }

    fn is_dead(&self) -> bool {
        self.state().is_dead()
    }

    fn kill(&mut self) {
        self.state_mut().kill();
    }

    fn last_score(&self) -> f32 {
        self.state().last_score()
    }

    fn last_can_run(&self) -> bool {
        self.state().last_can_run()
    }
}
