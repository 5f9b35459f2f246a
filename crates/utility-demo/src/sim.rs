//! Simulation Runner
//!
//! Drives the demo world and its controller at a fixed time step.

use std::collections::BTreeMap;

use serde::Serialize;
use utility_core::{Controller, ControllerSnapshot, DebugOverlay, EventObserver};

use crate::actions::{IdleAction, ProximityAlertAction, WanderAction};
use crate::config::{DemoConfig, SetupError};
use crate::world::DemoWorld;

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_time: f32,
    /// Number of selection changes, including changes to no action
    pub changes: u64,
    /// Ticks spent with each action current ("none" for no action)
    pub ticks_per_action: BTreeMap<String, u64>,
}

/// The demo world plus the controller deciding for its agent.
pub struct Simulation {
    world: DemoWorld,
    controller: Controller<DemoWorld>,
    overlay: DebugOverlay,
    time: f32,
    dt: f32,
    summary: RunSummary,
}

impl Simulation {
    /// Builds the world, registers the demo actions and starts the controller.
    pub fn new(config: &DemoConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let settings = &config.demo;

        let mut controller = Controller::new(config.controller.clone())?;
        controller.register(IdleAction::new(settings.boredom_per_tick))?;
        controller.register(ProximityAlertAction::new(settings.detection_distance))?;
        controller.register(WanderAction::new(
            settings.boredom_threshold,
            settings.wander_drain_per_tick,
            settings.wander_step,
        ))?;
        controller.start()?;

        tracing::info!(
            "Simulation ready: {} actions, dt = {}s",
            controller.action_count(),
            settings.dt
        );

        Ok(Self {
            world: DemoWorld::new(settings),
            controller,
            overlay: DebugOverlay::new(),
            time: 0.0,
            dt: settings.dt,
            summary: RunSummary::default(),
        })
    }

    /// Attaches an observer to the controller.
    pub fn subscribe(&mut self, observer: impl EventObserver + 'static) {
        self.controller.subscribe(observer);
    }

    /// Advances the world and runs one controller tick.
    pub fn step(&mut self) {
        self.world.advance(self.time);

        let before = self.current_name();
        self.controller.tick(self.time, &mut self.world);
        let after = self.current_name();

        if before != after {
            self.summary.changes += 1;
        }
        let key = after.unwrap_or_else(|| "none".to_string());
        *self.summary.ticks_per_action.entry(key).or_insert(0) += 1;
        self.summary.ticks += 1;

        self.time += self.dt;
        self.summary.final_time = self.time;
    }

    /// Runs `ticks` steps and returns the accumulated summary.
    pub fn run(&mut self, ticks: u64) -> &RunSummary {
        for _ in 0..ticks {
            self.step();
        }
        &self.summary
    }

    /// Renders the debug overlay for the current state.
    pub fn render_overlay(&mut self) -> &str {
        let snapshot = self.controller.snapshot();
        self.overlay.render(&snapshot)
    }

    pub fn stop(&mut self) {
        self.controller.stop(&mut self.world);
    }

    pub fn world(&self) -> &DemoWorld {
        &self.world
    }

    pub fn controller(&self) -> &Controller<DemoWorld> {
        &self.controller
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.controller.snapshot()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    fn current_name(&self) -> Option<String> {
        self.controller
            .current_action()
            .map(|a| a.name().to_string())
    }
}
