// Session control: one entry point per detection frame, plus the
// start/stop/reset controls the page buttons map onto.
// All state lives here in plain structs; the display strings are projected
// from it, never parsed back out of the page.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec;
use crate::error::GameError;
use crate::matcher;
use crate::round::{RoundState, RoundTimer};
use crate::score::ScoreBoard;
use crate::types::{DetectionFrame, DisplaySnapshot, EmojiCode, FrameOutcome, GameConfig, Timestamp};

/// Prompt shown while a round is open, and the idle default.
pub const MIMIC_PROMPT: &str = "Mimic Me!";
/// Shown when the open round is won.
pub const WIN_MESSAGE: &str = "You got it! Wait for the next emoji...";
/// Shown after a reset, until the first detection frame arrives.
pub const WAITING_PROMPT: &str = "Wait for the first emoji...";
/// Target region placeholder outside a round.
pub const IDLE_TARGET: &str = "?";

/// Owns the whole game state and consumes the detector's frame stream.
pub struct SessionController {
    running: bool,
    timer: RoundTimer,
    round: Option<RoundState>,
    score: ScoreBoard,
    result_text: String,
    vocabulary: Vec<EmojiCode>,
    rng: StdRng,
}

impl SessionController {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Deterministic target draws for reproducible sessions.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        let vocabulary = match config.vocabulary {
            Some(codes) if codes.is_empty() => {
                return Err(GameError::InvalidConfig(
                    "vocabulary override must not be empty".to_string(),
                ));
            }
            Some(codes) => codes.into_iter().map(EmojiCode::from_u32).collect(),
            None => codec::EMOJI_VOCABULARY
                .iter()
                .copied()
                .map(EmojiCode::from_u32)
                .collect(),
        };

        Ok(SessionController {
            running: false,
            timer: RoundTimer::new(config.round.round_length_secs),
            round: None,
            score: ScoreBoard::new(),
            result_text: MIMIC_PROMPT.to_string(),
            vocabulary,
            rng,
        })
    }

    /// Process one detection frame. Boundary handling runs before match
    /// evaluation, so a frame that crosses a boundary is scored against the
    /// round it just opened.
    pub fn on_detection(&mut self, frame: &DetectionFrame) -> FrameOutcome {
        if !self.running {
            return FrameOutcome {
                round_started: false,
                round_won: false,
                display: self.snapshot(),
            };
        }

        let ts = Timestamp::from_secs_f64(frame.timestamp);

        let mut round_started = false;
        if let Some(elapsed) = self.timer.observe(ts) {
            let target = self.draw_target();
            match self.round.as_mut() {
                Some(round) => round.rotate(target),
                None => self.round = Some(RoundState::new(target)),
            }
            self.score.record_round_boundary();
            self.result_text = MIMIC_PROMPT.to_string();
            round_started = true;
            log::debug!(
                "round boundary at {}s elapsed, target U+{:X}",
                elapsed,
                target.as_u32()
            );
        }

        let mut round_won = false;
        if let (Some(round), Some(face)) = (self.round.as_mut(), frame.faces.first()) {
            if matcher::evaluate(round, &face.emojis.dominant_emoji, &mut self.score) {
                self.result_text = WIN_MESSAGE.to_string();
                round_won = true;
            }
        }

        FrameOutcome {
            round_started,
            round_won,
            display: self.snapshot(),
        }
    }

    /// Begin accepting detection frames. Idempotent while running.
    pub fn on_start(&mut self) -> DisplaySnapshot {
        if !self.running {
            self.running = true;
            log::info!("session started");
        }
        self.snapshot()
    }

    /// Stop accepting frames and return the display to its idle defaults.
    pub fn on_stop(&mut self) -> DisplaySnapshot {
        if self.running {
            self.running = false;
            self.timer.reset();
            self.round = None;
            self.score.reset();
            self.result_text = MIMIC_PROMPT.to_string();
            log::info!("session stopped");
        }
        self.snapshot()
    }

    /// Reinitialize the game. A running detector keeps delivering frames;
    /// the next one latches a fresh session clock.
    pub fn on_reset(&mut self) -> DisplaySnapshot {
        self.timer.reset();
        self.round = None;
        self.score.reset();
        self.result_text = WAITING_PROMPT.to_string();
        log::info!("session reset");
        self.snapshot()
    }

    /// Project the three text regions from the current state.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            target: self
                .round
                .as_ref()
                .map(|round| codec::glyph(round.target))
                .unwrap_or_else(|| IDLE_TARGET.to_string()),
            result: self.result_text.clone(),
            score: self.score.render(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    fn draw_target(&mut self) -> EmojiCode {
        let index = self.rng.gen_range(0..self.vocabulary.len());
        self.vocabulary[index]
    }
}
