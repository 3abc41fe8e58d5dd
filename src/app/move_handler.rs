// src/app/move_handler.rs
//! ドロップ (カード移動) とダブルクリック (組札への自動移動) を処理するよ！🖱️

use log::info;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::engine;
use crate::error::{IllegalMoveReason, SolitaireError};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::protocol::MoveResponse;

/// ドロップされたときの移動。ルール違反でもエラーにはせず、
/// `moved: false` と理由の入ったレスポンスを返す。
pub fn handle_move(
    state: &mut GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> MoveResponse {
    let result = engine::apply_move(state, source, source_index, destination);
    MoveResponse::from_result(&result, destination)
}

/// ダブルクリックされた山の一番上のカードを、置ける組札へ送る。
pub fn handle_auto_move(state: &mut GameState, source: StackType) -> MoveResponse {
    // クリア後は普通の移動と同じ理由で断る
    if state.is_won() {
        return MoveResponse::rejected(SolitaireError::from(IllegalMoveReason::GameAlreadyWon).to_string());
    }
    match find_automatic_foundation_move(state, source) {
        Some(foundation) => {
            info!("[AutoMove] {} -> {}", source, foundation);
            let top_index = state.stack(source).map_or(0, |stack| stack.len().saturating_sub(1));
            handle_move(state, source, top_index, foundation)
        }
        None => MoveResponse::rejected(format!("no foundation accepts the top card of {}", source)),
    }
}
