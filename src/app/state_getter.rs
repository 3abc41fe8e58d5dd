//! Gets the current game state and converts it to JSON.

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::components::game_state::GameState;
use crate::protocol::GameStateData;

/// ゲーム状態のスナップショットを JSON 文字列にする。
pub fn state_json(state: &GameState) -> Result<String, serde_json::Error> {
    let data = GameStateData::from(state);
    let json = serde_json::to_string(&data)?;
    debug!("Serialized game state ({} bytes).", json.len());
    Ok(json)
}

/// ゲーム状態を取得し、JSON 文字列として JS に返します。
pub fn get_state_json(state: &GameState) -> Result<JsValue, JsValue> {
    match state_json(state) {
        Ok(json_string) => Ok(JsValue::from_str(&json_string)),
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}
