// Typed errors with thiserror. Surface meaningful messages to JS.

use thiserror::Error;

/// Game core error types. All of them live at the JSON boundary; inside the
/// core, malformed glyphs and absent faces degrade to non-matches instead.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid detection frame: {0}")]
    InvalidFrame(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err.to_string())
    }
}
