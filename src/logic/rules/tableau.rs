//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::stack::CardStack;
use crate::error::IllegalMoveReason;

use super::common::can_stack_on_tableau;

/// 列 `run` (下から順) を場札 `column` の上に置けるかチェックする。
///
/// 見るのは列の一番下のカード (`run[0]`) だけ。列自体が正しいかは
/// 呼び出し側 (`move_validation`) で確認済みの前提だよ。
pub fn can_move_to_tableau(run: &[Card], column: &CardStack) -> Result<(), IllegalMoveReason> {
    let base = run.first().ok_or(IllegalMoveReason::BrokenRun)?;

    let result = match column.top() {
        // 空の列にはキングだけ！👑 色はどっちでもOK
        None => {
            if base.rank == Rank::King {
                Ok(())
            } else {
                Err(IllegalMoveReason::NotAKing)
            }
        }
        Some(top) if !top.is_face_up => Err(IllegalMoveReason::DestinationFaceDown),
        Some(top) => can_stack_on_tableau(base, top),
    };

    trace!(
        "[Tableau Rule] {} (+{} more) onto {} (top: {:?}) -> {:?}",
        base,
        run.len() - 1,
        column.stack_type(),
        column.top().map(ToString::to_string),
        result
    );
    result
}
