// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS から使う SolitaireApp
pub mod components; // カード・山・ゲーム状態
pub mod config; // ルール定数と実行時設定
pub mod engine; // エンジンの入口
pub mod error;
pub mod logic; // ルール判定・デッキ・整合性チェック
pub mod protocol; // JS とやり取りする JSON の形
pub mod systems; // 状態を動かすシステムたち

pub use app::game_app::SolitaireApp;
pub use components::{Card, CardColor, CardStack, GameState, GameStatus, Rank, StackType, Suit};
pub use error::{IllegalMoveReason, InvariantViolation, SolitaireError};
pub use systems::move_card_system::MoveOutcome;
pub use systems::stock_system::DrawOutcome;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::logger::init(log::LevelFilter::Info);
    log::info!("Panic hook and console logger set!");
}
