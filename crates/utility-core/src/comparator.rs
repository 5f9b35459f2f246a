//! Score comparison and tie-breaking.
//!
//! Decides whether a challenger replaces the running best candidate. The same
//! rule is mirrored for highest-wins and lowest-wins modes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ControllerConfig;

/// Which end of the score range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrder {
    #[default]
    Highest,
    Lowest,
}

/// Comparison rule derived from the controller configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionPolicy {
    pub order: ScoreOrder,
    /// Scores closer than or equal to this are tied
    pub tolerance: f32,
    /// Coin flip on ties instead of keeping the existing best
    pub randomize_ties: bool,
}

impl SelectionPolicy {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            order: if config.use_lowest_score {
                ScoreOrder::Lowest
            } else {
                ScoreOrder::Highest
            },
            tolerance: config.score_equality_tolerance,
            randomize_ties: config.choose_randomly_if_equal,
        }
    }

    /// Returns true if the two scores fall within the tolerance band.
    pub fn is_tie(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.tolerance
    }

    /// Returns true if `challenger` should replace `best`.
    ///
    /// With no existing best the challenger always wins. A tie consumes one
    /// draw from `rng` when ties are randomized, and no draw otherwise.
    pub fn challenger_wins<R: Rng + ?Sized>(
        &self,
        best: Option<f32>,
        challenger: f32,
        rng: &mut R,
    ) -> bool {
        let Some(best) = best else {
            return true;
        };

        if self.is_tie(best, challenger) {
            if self.randomize_ties {
                return rng.gen::<f32>() < 0.5;
            }
            // An equal score is not enough to replace the best
            return false;
        }

        match self.order {
            ScoreOrder::Highest => challenger > best,
            ScoreOrder::Lowest => challenger < best,
        }
    }
}
