//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::game_state::GameState;

/// 山札をクリックしたら1枚めくれるか。山札に1枚でもあればOK。
pub fn can_deal_from_stock(state: &GameState) -> bool {
    !state.stock().is_empty()
}

/// 山札が空っぽで、捨て札にカードがあるときだけ、捨て札を山札に戻せる。
pub fn can_reset_stock_from_waste(state: &GameState) -> bool {
    state.stock().is_empty() && !state.waste().is_empty()
}
