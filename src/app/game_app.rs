// src/app/game_app.rs

use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::{logger, move_handler, request_parser, state_getter, stock_handler};
use crate::components::game_state::{format_elapsed, GameState};
use crate::config::GameSettings;
use crate::engine;
use crate::protocol::MoveResponse;

/// JS の `Date.now()`。
fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_json::to_string(value)
        .map(|json| JsValue::from_str(&json))
        .map_err(|e| {
            error!("Failed to serialize response: {}", e);
            to_js_error(e)
        })
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// JS 側はこれを1つだけ new して、描画とイベント処理をする。
#[wasm_bindgen]
pub struct SolitaireApp {
    state: GameState,
    settings: GameSettings,
    // 勝った瞬間の時刻。タイマー表示はここで止まる ⏱️
    won_at_ms: Option<f64>,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// 設定 JSON (省略可) を読んで、最初のゲームを配る。
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<SolitaireApp, JsValue> {
        let settings = GameSettings::from_json(settings_json.as_deref().unwrap_or(""))
            .map_err(|e| to_js_error(format!("invalid settings: {}", e)))?;
        logger::init(settings.level_filter());
        info!("SolitaireApp: Initializing... {:?}", settings);

        let state = engine::new_game(settings.seed, now_ms()).map_err(to_js_error)?;
        Ok(SolitaireApp {
            state,
            settings,
            won_at_ms: None,
        })
    }

    /// 新しいゲームを配り直す。シードを渡せば同じ配置を再現できるよ。
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<(), JsValue> {
        self.state = engine::new_game(seed, now_ms()).map_err(to_js_error)?;
        self.won_at_ms = None;
        Ok(())
    }

    /// ドラッグ中に「ここに置ける？」を聞く用。状態は変えない。
    pub fn is_legal_move(&self, source_json: &str, source_index: usize, destination_json: &str) -> bool {
        match (
            request_parser::parse_stack_type(source_json),
            request_parser::parse_stack_type(destination_json),
        ) {
            (Ok(source), Ok(destination)) => engine::is_legal_move(&self.state, source, source_index, destination),
            _ => false,
        }
    }

    /// ドロップされたときに呼ぶ。結果は `MoveResponse` の JSON。
    /// 置き場の指定が読めないときだけ Err になる。
    pub fn apply_move(
        &mut self,
        source_json: &str,
        source_index: usize,
        destination_json: &str,
    ) -> Result<JsValue, JsValue> {
        let source = request_parser::parse_stack_type(source_json).map_err(to_js_error)?;
        let destination = request_parser::parse_stack_type(destination_json).map_err(to_js_error)?;
        let response = move_handler::handle_move(&mut self.state, source, source_index, destination);
        self.record_win(&response);
        to_json(&response)
    }

    /// 山札クリック。クリア後は Err。
    pub fn draw_from_stock(&mut self) -> Result<JsValue, JsValue> {
        let response = stock_handler::handle_stock_click(&mut self.state).map_err(to_js_error)?;
        to_json(&response)
    }

    /// ダブルクリックされた山の一番上を組札へ。
    pub fn auto_move_to_foundation(&mut self, source_json: &str) -> Result<JsValue, JsValue> {
        let source = request_parser::parse_stack_type(source_json).map_err(to_js_error)?;
        let response = move_handler::handle_auto_move(&mut self.state, source);
        self.record_win(&response);
        to_json(&response)
    }

    pub fn is_won(&self) -> bool {
        engine::is_won(&self.state)
    }

    /// 描画用のスナップショット JSON。
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.state)
    }

    /// タイマー表示 ("m:ss")。毎秒 JS から呼んでもらう。状態は変えない。
    pub fn elapsed_time_text(&self) -> String {
        let now = self.won_at_ms.unwrap_or_else(now_ms);
        format_elapsed(self.state.elapsed_seconds(now))
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    /// 今のゲームのシード値 (文字列)。
    pub fn seed(&self) -> String {
        self.state.seed().to_string()
    }

    /// 今のログレベル設定。
    pub fn log_level(&self) -> String {
        self.settings.log_level.clone()
    }
}

impl SolitaireApp {
    fn record_win(&mut self, response: &MoveResponse) {
        if response.won && self.won_at_ms.is_none() {
            let now = now_ms();
            info!(
                "SolitaireApp: クリア！🏆 {} moves, {}",
                self.state.move_count(),
                format_elapsed(self.state.elapsed_seconds(now))
            );
            self.won_at_ms = Some(now);
        }
    }
}
