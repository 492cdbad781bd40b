// Score bookkeeping. Counters are explicit state; the display string is a
// projection, never parsed back.

use serde::{Deserialize, Serialize};

/// Correct-match and elapsed-round counters for one session.
///
/// `total` counts round boundaries, not resolutions: a round that was never
/// won still advances the denominator when the next round begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreBoard {
    correct: u32,
    total: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        ScoreBoard::default()
    }

    /// A new round began.
    pub fn record_round_boundary(&mut self) {
        self.total += 1;
    }

    /// The current round was won. Callers guarantee at most one call per
    /// round (the evaluator's won flag).
    pub fn record_match(&mut self) {
        self.correct += 1;
    }

    pub fn render(&self) -> String {
        format!("Score: {} / {}", self.correct, self.total)
    }

    pub fn reset(&mut self) {
        *self = ScoreBoard::default();
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}
