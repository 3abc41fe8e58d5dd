// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! UI 側から「どの山の何枚目から」「どの山へ」という候補が来たら、
//! ここで OK / NG を判定する。判定するだけで状態は変えない！

use log::debug;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::IllegalMoveReason;

use super::common::is_valid_run;
use super::foundation::can_move_to_foundation;
use super::tableau::can_move_to_tableau;

/// `source` の `source_index` 番目から末尾までの列を、`destination` に
/// 移動できるか検証する。ダメなら理由を返すよ。
pub fn check_move(
    state: &GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> Result<(), IllegalMoveReason> {
    let result = check_move_inner(state, source, source_index, destination);
    debug!(
        "[Move Validation] {}[{}] -> {}: {:?}",
        source, source_index, destination, result
    );
    result
}

/// `check_move` の bool 版。何回呼んでも同じ答え、状態も変わらない。
pub fn is_move_valid(
    state: &GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> bool {
    check_move(state, source, source_index, destination).is_ok()
}

fn check_move_inner(
    state: &GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> Result<(), IllegalMoveReason> {
    if state.is_won() {
        return Err(IllegalMoveReason::GameAlreadyWon);
    }

    let source_stack = state.stack(source).ok_or(IllegalMoveReason::UnknownStack(source))?;
    let destination_stack = state
        .stack(destination)
        .ok_or(IllegalMoveReason::UnknownStack(destination))?;

    // 山札のカードはめくるだけ。直接は掴めない。
    if source == StackType::Stock {
        return Err(IllegalMoveReason::SourceIsStock);
    }
    if source == destination {
        return Err(IllegalMoveReason::SameStack);
    }

    let run = source_stack.run_from(source_index);
    let base = run.first().ok_or(IllegalMoveReason::SourceIndexOutOfRange {
        index: source_index,
        len: source_stack.len(),
    })?;
    if !base.is_face_up {
        return Err(IllegalMoveReason::SourceCardFaceDown);
    }

    // 捨て札と組札からは一番上の1枚だけ。
    if matches!(source, StackType::Waste | StackType::Foundation(_)) && run.len() != 1 {
        return Err(IllegalMoveReason::NotTopCard);
    }
    if !is_valid_run(run) {
        return Err(IllegalMoveReason::BrokenRun);
    }

    match destination {
        StackType::Foundation(_) => can_move_to_foundation(run, destination_stack),
        StackType::Tableau(_) => can_move_to_tableau(run, destination_stack),
        // 山札・捨て札に直接置くことはできない
        StackType::Stock | StackType::Waste => Err(IllegalMoveReason::InvalidDestination(destination)),
    }
}
