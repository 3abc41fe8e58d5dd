//! ルール判定で共通して使うヘルパー関数を置くよ。

use itertools::Itertools;

use crate::components::card::Card;
use crate::error::IllegalMoveReason;

/// `upper` (上に乗せるカード) を `lower` (下のカード) の上に場札として置けるか。
///
/// 色が違って、ランクがちょうど1つ下ならOK。
pub fn can_stack_on_tableau(upper: &Card, lower: &Card) -> Result<(), IllegalMoveReason> {
    if upper.color() == lower.color() {
        return Err(IllegalMoveReason::SameColor);
    }
    if !lower.rank.is_one_above(upper.rank) {
        return Err(IllegalMoveReason::RankNotAdjacent);
    }
    Ok(())
}

/// 下から順に並んだカードの列が「まとめて動かせる列」になっているか。
///
/// 全部表向きで、隣同士が色違い・1つずつ下がっていればOK。1枚だけでもOK。
pub fn is_valid_run(run: &[Card]) -> bool {
    !run.is_empty()
        && run.iter().all(|card| card.is_face_up)
        && run
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| can_stack_on_tableau(upper, lower).is_ok())
}
