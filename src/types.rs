// Strong typing over strings. Newtypes for timestamps and emoji code points,
// serde structs for the detector payload and the display surface.

use serde::{Deserialize, Serialize};

/// Timestamp in microseconds. Newtype for type safety.
///
/// The detection SDK reports frame timestamps as float seconds; they are
/// converted once at the boundary and handled as integers from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    /// Convert the SDK's float-seconds timestamp. Negative values clamp to 0.
    pub fn from_secs_f64(secs: f64) -> Self {
        Timestamp((secs * 1_000_000.0) as u64)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Whole-second bucket (floor). Round rotation math runs on these.
    pub fn whole_secs(&self) -> u64 {
        self.0 / 1_000_000
    }
}

/// Emoji identity as a Unicode code point. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct EmojiCode(u32);

impl EmojiCode {
    pub fn from_u32(code: u32) -> Self {
        EmojiCode(code)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Engine configuration passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub round: RoundSettings,
    /// Override the target vocabulary. Defaults to the classifier's fixed
    /// 13-emoji set when absent.
    #[serde(default)]
    pub vocabulary: Option<Vec<u32>>,
}

/// Round rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSettings {
    /// Seconds between target rotations.
    #[serde(default = "default_round_length")]
    pub round_length_secs: u64,
}

impl Default for RoundSettings {
    fn default() -> Self {
        RoundSettings {
            round_length_secs: default_round_length(),
        }
    }
}

fn default_round_length() -> u64 {
    10
}

/// One frame result from the detection SDK, as delivered to its
/// per-frame callback. Only the timestamp and the first face's dominant
/// emoji are read; every other field the SDK attaches (feature points,
/// expression and emotion score maps, appearance) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionFrame {
    /// Frame timestamp in seconds.
    pub timestamp: f64,
    #[serde(default)]
    pub faces: Vec<FaceResult>,
}

/// A detected face. The SDK nests its emoji classification under `emojis`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaceResult {
    #[serde(default)]
    pub emojis: EmojiReading,
}

/// Emoji classification for one face.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmojiReading {
    /// Best-guess emoji glyph, e.g. "😃". Empty when the SDK has none.
    #[serde(default)]
    pub dominant_emoji: String,
}

/// The three text regions the page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Target emoji glyph, or "?" outside a round.
    pub target: String,
    /// Round-result message.
    pub result: String,
    /// Rendered score string.
    pub score: String,
}

/// Per-frame return value to JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// A round boundary fired on this frame.
    pub round_started: bool,
    /// The current round was won on this frame.
    pub round_won: bool,
    pub display: DisplaySnapshot,
}
