//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::CardStack;
use crate::config::rules::{NUM_FOUNDATIONS, RANKS_PER_SUIT};

/// ゲームのクリア条件：4つの組札が全部13枚ずつ埋まっているか。
pub fn check_win_condition(foundations: &[CardStack]) -> bool {
    foundations.len() == NUM_FOUNDATIONS
        && foundations.iter().all(|foundation| foundation.len() == RANKS_PER_SUIT)
}
