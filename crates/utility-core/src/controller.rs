//! Action Controller
//!
//! Owns an agent's registered actions and picks exactly one of them to drive
//! the agent each tick.
//!
//! A running tick does, in order:
//! 1. Update the current action (if any), emit `Updated`
//! 2. Emit `PreCompute`
//! 3. Score every action in registration order and reduce to a best candidate
//! 4. Best found: emit `Found`, then swap to it if it differs from the current
//!    action and either nothing is current or the minimum action duration has
//!    elapsed since the last change
//! 5. Nothing found: emit `NotFound`, then deselect the current action
//!
//! Swapping always exits and resets the outgoing action before entering the
//! incoming one.

use std::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use utility_events::{ActionSnapshot, ControllerEvent, ControllerSnapshot, EventKind, RunState};

use crate::action::Action;
use crate::comparator::SelectionPolicy;
use crate::config::ControllerConfig;
use crate::error::{ActionError, ControllerError};
use crate::observer::EventObserver;

/// Per-agent decision loop over a fixed, ordered set of actions.
///
/// `C` is the host context passed through to every action call.
pub struct Controller<C> {
    config: ControllerConfig,
    policy: SelectionPolicy,
    actions: Vec<Box<dyn Action<C>>>,
    /// Index into `actions` of the current action
    current: Option<usize>,
    time_of_last_change: f32,
    run_state: RunState,
    rng: SmallRng,
    /// Number of evaluated ticks
    tick_count: u64,
    /// Host time of the most recent tick
    now: f32,
    observers: Vec<Box<dyn EventObserver>>,
}

impl<C> Controller<C> {
    /// Creates an idle controller after validating the configuration.
    ///
    /// The tie-break random source is seeded from `config.seed` when set,
    /// otherwise from entropy.
    pub fn new(config: ControllerConfig) -> Result<Self, ControllerError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Ok(Self {
            policy: SelectionPolicy::from_config(&config),
            config,
            actions: Vec::new(),
            current: None,
            time_of_last_change: 0.0,
            run_state: RunState::Idle,
            rng,
            tick_count: 0,
            now: 0.0,
            observers: Vec::new(),
        })
    }

    /// Replaces the tie-break random source.
    pub fn with_rng(mut self, rng: SmallRng) -> Self {
        self.rng = rng;
        self
    }

    /// Registers an action. Registration order is evaluation order, and the
    /// earlier of two tied actions wins when ties are not randomized.
    pub fn register(&mut self, action: impl Action<C> + 'static) -> Result<(), ControllerError> {
        self.register_boxed(Box::new(action))
    }

    pub fn register_boxed(&mut self, action: Box<dyn Action<C>>) -> Result<(), ControllerError> {
        if self.run_state != RunState::Idle {
            return Err(ControllerError::RegistrationClosed);
        }
        if self.actions.iter().any(|a| a.name() == action.name()) {
            return Err(ControllerError::DuplicateAction(action.name().to_string()));
        }

        tracing::debug!("Registered action '{}'", action.name());
        self.actions.push(action);
        Ok(())
    }

    /// Attaches an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: impl EventObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Begins evaluation.
    ///
    /// Moves an idle controller to running. A running controller is left as
    /// is, and a stopped one stays stopped until [`restart`](Self::restart).
    pub fn start(&mut self) -> Result<RunState, ControllerError> {
        if self.run_state == RunState::Idle {
            if self.actions.is_empty() {
                return Err(ControllerError::NoActions);
            }
            self.run_state = RunState::Running;
            tracing::info!("Controller started with {} actions", self.actions.len());
        }
        Ok(self.run_state)
    }

    /// Stops evaluation, exiting and resetting the current action if there
    /// is one.
    pub fn stop(&mut self, ctx: &mut C) {
        self.run_state = RunState::Stopped;
        self.exit_current(ctx);
        self.emit(EventKind::Stopped, None);
        tracing::info!("Controller stopped at tick {}", self.tick_count);
    }

    /// Resumes evaluation with no current action, so the next tick selects
    /// immediately regardless of the minimum action duration.
    pub fn restart(&mut self, ctx: &mut C) -> Result<(), ControllerError> {
        if self.actions.is_empty() {
            return Err(ControllerError::NoActions);
        }

        self.exit_current(ctx);
        self.run_state = RunState::Running;
        self.emit(EventKind::Restarted, None);
        tracing::info!("Controller restarted at tick {}", self.tick_count);
        Ok(())
    }

    /// Runs one evaluation pass at host time `now` (seconds).
    ///
    /// Does nothing unless the controller is running.
    pub fn tick(&mut self, now: f32, ctx: &mut C) {
        if !self.run_state.is_running() {
            return;
        }
        self.now = now;
        self.tick_count += 1;

        // Tick the current action first so it can report completion through
        // its score in the compute phase below
        if let Some(index) = self.current {
            if let Err(err) = self.actions[index].update(ctx) {
                self.fault(index, err, ctx);
            }
        }
        let current_name = self.current_name();
        self.emit(EventKind::Updated, current_name);

        self.emit(EventKind::PreCompute, None);
        let best = self.compute_best_action(ctx);

        match best {
            Some(best) => {
                let best_name = self.actions[best].name().to_string();
                self.emit(EventKind::Found, Some(best_name));

                if self.current != Some(best) && self.may_change() {
                    self.swap_to(Some(best), ctx);
                    let current_name = self.current_name();
                    self.emit(EventKind::Changed, current_name);
                }
            }
            None => {
                self.emit(EventKind::NotFound, None);

                if self.current.is_some() {
                    self.swap_to(None, ctx);
                    self.emit(EventKind::Changed, None);
                }
            }
        }
    }

    /// Kills a registered action.
    ///
    /// A current action is exited and reset first, leaving the controller
    /// with no current action.
    pub fn kill_action(&mut self, name: &str, ctx: &mut C) -> Result<(), ControllerError> {
        let index = self.index_of(name)?;

        if self.current == Some(index) {
            self.exit_current(ctx);
            self.time_of_last_change = self.now;
            self.emit(EventKind::Changed, None);
        }
        self.actions[index].kill();
        Ok(())
    }

    /// Resets a dead action so it is scored again.
    ///
    /// Returns false if the action was not dead.
    pub fn revive_action(&mut self, name: &str) -> Result<bool, ControllerError> {
        let index = self.index_of(name)?;
        let action = &mut self.actions[index];

        if !action.is_dead() {
            return Ok(false);
        }
        action.reset();
        Ok(true)
    }

    pub fn current_action(&self) -> Option<&(dyn Action<C> + 'static)> {
        self.current.map(|index| self.actions[index].as_ref())
    }

    /// Host time of the last selection change (0 before the first one).
    pub fn time_of_last_change(&self) -> f32 {
        self.time_of_last_change
    }

    /// Last computed score of the current action, 0 with no current action.
    pub fn current_score(&self) -> f32 {
        self.current_action().map_or(0.0, |a| a.last_score())
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Registered actions in evaluation order.
    pub fn actions(&self) -> impl Iterator<Item = &(dyn Action<C> + 'static)> + '_ {
        self.actions.iter().map(|a| a.as_ref())
    }

    pub fn action(&self, name: &str) -> Option<&(dyn Action<C> + 'static)> {
        self.actions
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Captures the state needed by overlays and logs.
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            tick: self.tick_count,
            run_state: self.run_state,
            current_action: self.current_name(),
            current_score: self.current_score(),
            time_of_last_change: self.time_of_last_change,
            actions: self
                .actions
                .iter()
                .enumerate()
                .map(|(index, a)| ActionSnapshot {
                    name: a.name().to_string(),
                    last_score: a.last_score(),
                    last_can_run: a.last_can_run(),
                    is_dead: a.is_dead(),
                    is_current: self.current == Some(index),
                })
                .collect(),
        }
    }

    /// Scores every action and returns the index of the best candidate.
    ///
    /// Ineligible actions get a stored score of 0. With `ignore_zero_scores`
    /// an action scoring exactly 0 cannot become best.
    fn compute_best_action(&mut self, ctx: &mut C) -> Option<usize> {
        let mut best: Option<usize> = None;

        for index in 0..self.actions.len() {
            let score = match self.evaluate(index, ctx) {
                Ok(Some(score)) => score,
                Ok(None) => continue,
                Err(err) => {
                    self.fault(index, err, ctx);
                    continue;
                }
            };

            if self.config.ignore_zero_scores && score == 0.0 {
                continue;
            }

            let best_score = best.map(|b| self.actions[b].last_score());
            if self.policy.challenger_wins(best_score, score, &mut self.rng) {
                best = Some(index);
            }
        }

        best
    }

    /// Stores eligibility and score for one action. `None` means ineligible.
    fn evaluate(&mut self, index: usize, ctx: &C) -> Result<Option<f32>, ActionError> {
        let action = &mut self.actions[index];

        let can_run = !action.is_dead() && action.can_run(ctx)?;
        if !action.state_mut().set_last_can_run(can_run) {
            // Keeps the overlay readable
            action.state_mut().set_last_score(0.0);
            return Ok(None);
        }

        let score = action.score(ctx)?;
        if !score.is_finite() {
            return Err(ActionError::failed(
                action.name(),
                format!("score must be finite, got {}", score),
            ));
        }
        Ok(Some(action.state_mut().set_last_score(score)))
    }

    fn may_change(&self) -> bool {
        self.current.is_none()
            || self.now - self.time_of_last_change > self.config.minimum_action_duration
    }

    /// Exits the current action, then enters `next`.
    fn swap_to(&mut self, next: Option<usize>, ctx: &mut C) {
        self.exit_current(ctx);

        self.current = next;
        if let Some(index) = next {
            match self.actions[index].enter(ctx) {
                Ok(()) => {
                    let name = self.actions[index].name().to_string();
                    tracing::debug!("Entered action '{}' at {:.3}s", name, self.now);
                    self.emit(EventKind::Entered, Some(name));
                }
                Err(err) => {
                    self.current = None;
                    self.actions[index].reset();
                    self.mark_faulted(index, &err);
                }
            }
        }

        self.time_of_last_change = self.now;
    }

    /// Exits and resets the current action, leaving none current.
    fn exit_current(&mut self, ctx: &mut C) {
        let Some(index) = self.current.take() else {
            return;
        };

        let action = &mut self.actions[index];
        let exited = action.exit(ctx);
        action.reset();

        let name = action.name().to_string();
        tracing::debug!("Ended action '{}' at {:.3}s", name, self.now);
        self.emit(EventKind::Ended, Some(name));

        if let Err(err) = exited {
            self.mark_faulted(index, &err);
        }
    }

    /// Handles a failed `update`, `can_run` or `score`.
    fn fault(&mut self, index: usize, err: ActionError, ctx: &mut C) {
        if self.current == Some(index) {
            self.exit_current(ctx);
            self.time_of_last_change = self.now;
            self.emit(EventKind::Changed, None);
        }
        self.mark_faulted(index, &err);
    }

    fn mark_faulted(&mut self, index: usize, err: &ActionError) {
        let action = &mut self.actions[index];
        action.kill();
        action.state_mut().set_last_can_run(false);
        action.state_mut().set_last_score(0.0);

        let name = action.name().to_string();
        tracing::warn!("Action '{}' faulted and was killed: {}", name, err);
        self.emit(EventKind::Faulted, Some(name));
    }

    fn current_name(&self) -> Option<String> {
        self.current_action().map(|a| a.name().to_string())
    }

    fn index_of(&self, name: &str) -> Result<usize, ControllerError> {
        self.actions
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| ControllerError::UnknownAction(name.to_string()))
    }

    fn emit(&mut self, kind: EventKind, action: Option<String>) {
        if self.observers.is_empty() {
            return;
        }

        let mut event = ControllerEvent::new(self.tick_count, self.now, kind);
        event.action = action;
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl<C> fmt::Debug for Controller<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("current", &self.current_name())
            .field("time_of_last_change", &self.time_of_last_change)
            .field("run_state", &self.run_state)
            .field("tick_count", &self.tick_count)
            .finish()
    }
}
