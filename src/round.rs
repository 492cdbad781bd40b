// Round rotation driven by frame timestamps.
// Detection frames arrive at irregular, frame-paced intervals — and the first
// successful detection can lag model loading by tens of seconds — so rotation
// compares elapsed-second buckets between consecutive frames instead of
// relying on a wall-clock interval callback.

use crate::types::{EmojiCode, Timestamp};

/// Decides when a new round begins, based on elapsed whole seconds since the
/// first observed frame.
///
/// Two states: Uninitialized (no frame seen since construction or reset) and
/// Running. The first observation latches the reference time and is itself
/// checked against elapsed 0, so it fires the initial boundary.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    round_length_secs: u64,
    first_observed: Option<Timestamp>,
    prev_elapsed: Option<u64>,
}

impl RoundTimer {
    /// Round length is clamped to at least one second.
    pub fn new(round_length_secs: u64) -> Self {
        RoundTimer {
            round_length_secs: round_length_secs.max(1),
            first_observed: None,
            prev_elapsed: None,
        }
    }

    /// Feed one frame timestamp. Returns `Some(elapsed_secs)` when a round
    /// boundary fires: elapsed whole seconds are a multiple of the round
    /// length and differ from the previous frame's bucket. On a monotone
    /// stream this fires at most once per distinct elapsed-second value.
    pub fn observe(&mut self, ts: Timestamp) -> Option<u64> {
        let first = *self.first_observed.get_or_insert(ts);
        let elapsed = ts.whole_secs().saturating_sub(first.whole_secs());

        let fires = elapsed % self.round_length_secs == 0 && self.prev_elapsed != Some(elapsed);
        self.prev_elapsed = Some(elapsed);

        fires.then_some(elapsed)
    }

    /// Back to Uninitialized; the next frame latches a fresh reference time.
    pub fn reset(&mut self) {
        self.first_observed = None;
        self.prev_elapsed = None;
    }

    pub fn is_running(&self) -> bool {
        self.first_observed.is_some()
    }
}

/// The target and won flag for the round in progress.
///
/// `won` only ever transitions false -> true within a round; `rotate` is the
/// single place it clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub target: EmojiCode,
    pub won: bool,
}

impl RoundState {
    pub fn new(target: EmojiCode) -> Self {
        RoundState { target, won: false }
    }

    /// Begin a new round with a fresh target.
    pub fn rotate(&mut self, target: EmojiCode) {
        self.target = target;
        self.won = false;
    }
}
