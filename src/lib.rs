// mimic_core: Mimic Me! game engine for the browser.
// The page's JS is plumbing: it forwards the detection SDK's per-frame
// callback into the engine and applies the returned display snapshot with
// set-text operations. All game state and logic live here.

mod codec;
mod error;
mod matcher;
mod round;
mod score;
mod session;
mod types;

use wasm_bindgen::prelude::*;

pub use codec::{decode, encode, EMOJI_VOCABULARY};
pub use error::GameError;
pub use round::{RoundState, RoundTimer};
pub use score::ScoreBoard;
pub use session::{SessionController, IDLE_TARGET, MIMIC_PROMPT, WAITING_PROMPT, WIN_MESSAGE};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine interface exposed to JavaScript.
/// One call per detection frame; button handlers map onto start/stop/reset.
#[wasm_bindgen]
pub struct Engine {
    session: SessionController,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Engine, JsValue> {
        let config: GameConfig = serde_json::from_str(config_json)
            .map_err(|e| to_js(GameError::InvalidConfig(e.to_string())))?;
        let session = SessionController::new(config).map_err(to_js)?;
        Ok(Engine { session })
    }

    /// Process one frame result from the detection SDK's callback.
    /// Returns the serialized `FrameOutcome` for the page to render.
    pub fn process_frame(&mut self, frame_json: &str) -> Result<String, JsValue> {
        let frame: DetectionFrame = serde_json::from_str(frame_json)
            .map_err(|e| to_js(GameError::InvalidFrame(e.to_string())))?;

        let outcome = self.session.on_detection(&frame);
        serde_json::to_string(&outcome).map_err(|e| to_js(GameError::from(e)))
    }

    /// Start button: begin accepting detection frames.
    pub fn start(&mut self) -> Result<String, JsValue> {
        snapshot_json(self.session.on_start())
    }

    /// Stop button: stop accepting frames, display back to idle defaults.
    pub fn stop(&mut self) -> Result<String, JsValue> {
        snapshot_json(self.session.on_stop())
    }

    /// Reset button: reinitialize the game while frames keep flowing.
    pub fn reset(&mut self) -> Result<String, JsValue> {
        snapshot_json(self.session.on_reset())
    }
}

fn snapshot_json(snapshot: DisplaySnapshot) -> Result<String, JsValue> {
    serde_json::to_string(&snapshot).map_err(|e| to_js(GameError::from(e)))
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn invalid_config_is_rejected() {
        assert!(Engine::new("not json").is_err());
        assert!(Engine::new(r#"{"vocabulary":[]}"#).is_err());
    }

    #[wasm_bindgen_test]
    fn invalid_frame_is_rejected() {
        let mut engine = Engine::new("{}").unwrap();
        assert!(engine.process_frame("not json").is_err());
        assert!(engine.process_frame(r#"{"faces": []}"#).is_err());
    }
}
