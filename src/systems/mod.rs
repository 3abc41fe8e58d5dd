// src/systems/mod.rs
//! ゲームの状態を動かす「システム」たちだよ！⚙️
//!
//! - `deal_system`: 最初のカード配り
//! - `move_card_system`: カード移動の実行 (検証 → 移動 → めくり → 勝利判定)
//! - `stock_system`: 山札をめくる / 捨て札を山札に戻す
//! - `win_condition_system`: 勝利判定

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;
