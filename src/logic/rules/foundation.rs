//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::stack::CardStack;
use crate::error::IllegalMoveReason;

/// 列 `run` を組札 `foundation` の上に置けるかチェックする。
///
/// - 1枚ずつしか置けない。
/// - 空の組札にはエースだけ (スートはなんでもOK、そのエースで組札のスートが決まる)。
/// - 空じゃなければ、同じスートでランクがちょうど1つ上のカードだけ。
pub fn can_move_to_foundation(run: &[Card], foundation: &CardStack) -> Result<(), IllegalMoveReason> {
    let card = match run {
        [card] => card,
        _ => return Err(IllegalMoveReason::MultipleCardsToFoundation),
    };

    let result = match foundation.top() {
        None => {
            if card.rank == Rank::Ace {
                Ok(())
            } else {
                Err(IllegalMoveReason::NotAnAce)
            }
        }
        Some(top) => {
            if card.suit != top.suit {
                Err(IllegalMoveReason::SuitMismatch)
            } else if !card.rank.is_one_above(top.rank) {
                Err(IllegalMoveReason::RankNotAdjacent)
            } else {
                Ok(())
            }
        }
    };

    trace!(
        "[Foundation Rule] {} onto {} (top: {:?}) -> {:?}",
        card,
        foundation.stack_type(),
        foundation.top().map(ToString::to_string),
        result
    );
    result
}
