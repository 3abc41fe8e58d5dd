// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4つの組札が13枚ずつ埋まったら、状態を `Won` にする。
/// 一度 `Won` になったら、もう `Playing` には戻らない。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    /// 今回の呼び出しで `Won` になったら `true`。
    pub fn check(&self, state: &mut GameState) -> bool {
        if state.status() != GameStatus::Playing {
            return false;
        }

        if check_win_condition(state.foundations()) {
            info!("WinConditionSystem: 勝利条件達成！🏆 (moves: {})", state.move_count());
            state.set_status(GameStatus::Won);
            return true;
        }
        false
    }
}
