//! Debug overlay text.
//!
//! Renders a controller snapshot as the plain-text block shown above an agent
//! during development. The overlay is an ordinary value owned by the caller;
//! there is no shared rendering state.

use utility_events::ControllerSnapshot;

const SEPARATOR: &str = "--------------------------------------------------";

/// Upper bound on the bars drawn for one action
const MAX_BARS: usize = 50;

/// Text renderer for controller snapshots.
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    text: String,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-renders the overlay from a snapshot and returns the text.
    ///
    /// Each action gets one `>` per whole score point, rounded half to even
    /// and clamped to `0..=MAX_BARS`.
    pub fn render(&mut self, snapshot: &ControllerSnapshot) -> &str {
        self.text.clear();

        match &snapshot.current_action {
            Some(name) => self
                .text
                .push_str(&format!("Current Action: {}\n", name)),
            None => self.text.push_str("NO ACTION!\n"),
        }
        self.text.push_str(SEPARATOR);
        self.text.push('\n');

        for action in &snapshot.actions {
            let bars = score_bars(action.last_score);
            self.text
                .push_str(&format!("{}\t | {}\n", bars, action.name));
        }

        self.text.push_str(SEPARATOR);
        self.text.push('\n');
        &self.text
    }

    /// Blanks the overlay.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the last rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn score_bars(score: f32) -> String {
    let rounded = score.round_ties_even();
    if rounded.is_nan() || rounded <= 0.0 {
        return String::new();
    }
    ">".repeat(rounded.min(MAX_BARS as f32) as usize)
}
