// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! ダブルクリックされたカードを、置ける組札に自動で送るときに使う。

use log::debug;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::rules::NUM_FOUNDATIONS;
use crate::logic::rules::is_move_valid;

/// `source` の一番上のカードを置ける組札を探す関数だよ。
///
/// 組札 0〜3 を順番に見て、最初に置けたところを返す。
/// エースなら最初の空いてる組札、それ以外は同じスートの組札になるはず。
/// 見つからなければ `None`。判定するだけで状態は変えない！
pub fn find_automatic_foundation_move(state: &GameState, source: StackType) -> Option<StackType> {
    let top_index = state.stack(source)?.len().checked_sub(1)?;

    let found = (0..NUM_FOUNDATIONS as u8)
        .map(StackType::Foundation)
        .find(|&foundation| is_move_valid(state, source, top_index, foundation));

    match found {
        Some(foundation) => debug!("[AutoMove] {} top card can go to {}", source, foundation),
        None => debug!("[AutoMove] No suitable foundation found for {}", source),
    }
    found
}
