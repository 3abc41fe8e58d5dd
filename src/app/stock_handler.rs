// src/app/stock_handler.rs
//! Handles clicks on the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::components::game_state::GameState;
use crate::engine;
use crate::error::SolitaireError;
use crate::protocol::DrawResponse;

/// 山札クリックを処理して、JS に返すレスポンスを作る。
pub fn handle_stock_click(state: &mut GameState) -> Result<DrawResponse, SolitaireError> {
    info!("Stock clicked (stock: {}, waste: {})", state.stock().len(), state.waste().len());
    let outcome = engine::draw_from_stock(state)?;
    Ok(DrawResponse::from(&outcome))
}
