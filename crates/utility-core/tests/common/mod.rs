//! Shared test actions.

#![allow(dead_code)]

use std::collections::HashMap;

use utility_core::{Action, ActionResult, ActionState};

/// Test context: scores are set per action name and lifecycle calls are
/// journaled.
#[derive(Debug, Default)]
pub struct Board {
    pub scores: HashMap<String, f32>,
    pub blocked: Vec<String>,
    pub journal: Vec<String>,
}

impl Board {
    pub fn with_scores(scores: &[(&str, f32)]) -> Self {
        let mut board = Self::default();
        for (name, score) in scores {
            board.set(name, *score);
        }
        board
    }

    pub fn set(&mut self, name: &str, score: f32) {
        self.scores.insert(name.to_string(), score);
    }

    pub fn take_journal(&mut self) -> Vec<String> {
        std::mem::take(&mut self.journal)
    }
}

/// Action whose score is read from the board.
pub struct BoardAction {
    state: ActionState,
}

impl BoardAction {
    pub fn new(name: &str) -> Self {
        Self {
            state: ActionState::new(name),
        }
    }
}

impl Action<Board> for BoardAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn enter(&mut self, ctx: &mut Board) -> ActionResult<()> {
        ctx.journal.push(format!("enter {}", self.name()));
        Ok(())
    }

    fn exit(&mut self, ctx: &mut Board) -> ActionResult<()> {
        ctx.journal.push(format!("exit {}", self.name()));
        Ok(())
    }

    fn can_run(&self, ctx: &Board) -> ActionResult<bool> {
        Ok(!ctx.blocked.iter().any(|b| b == self.name()))
    }

    fn score(&self, ctx: &Board) -> ActionResult<f32> {
        Ok(ctx.scores.get(self.name()).copied().unwrap_or(0.0))
    }

    fn update(&mut self, ctx: &mut Board) -> ActionResult<()> {
        ctx.journal.push(format!("update {}", self.name()));
        Ok(())
    }
}

/// Action that works for a fixed number of updates, then reports completion
/// by scoring zero.
pub struct ChoreAction {
    state: ActionState,
    base_score: f32,
    steps: u32,
    done: u32,
}

impl ChoreAction {
    pub fn new(name: &str, base_score: f32, steps: u32) -> Self {
        Self {
            state: ActionState::new(name),
            base_score,
            steps,
            done: 0,
        }
    }
}

impl Action<Board> for ChoreAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn enter(&mut self, ctx: &mut Board) -> ActionResult<()> {
        ctx.journal.push(format!("enter {}", self.name()));
        Ok(())
    }

    fn exit(&mut self, ctx: &mut Board) -> ActionResult<()> {
        ctx.journal.push(format!("exit {}", self.name()));
        Ok(())
    }

    fn score(&self, _ctx: &Board) -> ActionResult<f32> {
        if self.done >= self.steps {
            return Ok(0.0);
        }
        Ok(self.base_score)
    }

    fn update(&mut self, ctx: &mut Board) -> ActionResult<()> {
        self.done += 1;
        ctx.journal.push(format!("update {}", self.name()));
        Ok(())
    }

    fn on_reset(&mut self) {
        self.done = 0;
    }
}
