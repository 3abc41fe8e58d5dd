// src/systems/stock_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::{IllegalMoveReason, SolitaireError};
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste};

/// 山札をクリックしたときに何が起きたか。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// 山札から1枚めくって捨て札に置いた。
    Drew { card: Card },
    /// 山札が空だったので、捨て札を全部裏返して山札に戻した。
    Recycled { cards: usize },
    /// 山札も捨て札も空っぽ。何も起きない。
    Empty,
}

/// 山札 (Stock) と捨て札 (Waste) を扱うシステムだよ！🃏
///
/// 山札めくりは「手」に数えないので、手数は増やさない。
#[derive(Default)]
pub struct StockSystem;

impl StockSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&mut self, state: &mut GameState) -> Result<DrawOutcome, SolitaireError> {
        if state.is_won() {
            return Err(SolitaireError::GameFinished);
        }

        if can_deal_from_stock(state) {
            deal_one_card_from_stock(state).map(|card| DrawOutcome::Drew { card })
        } else if can_reset_stock_from_waste(state) {
            reset_waste_to_stock(state).map(|cards| DrawOutcome::Recycled { cards })
        } else {
            debug!("StockSystem: 山札も捨て札も空っぽ。何もしないよ");
            Ok(DrawOutcome::Empty)
        }
    }
}

/// 山札の一番上を表にして捨て札へ。
fn deal_one_card_from_stock(state: &mut GameState) -> Result<Card, SolitaireError> {
    let mut card = state
        .stack_mut(StackType::Stock)
        .ok_or(IllegalMoveReason::UnknownStack(StackType::Stock))?
        .pop()
        .ok_or(SolitaireError::EmptyStack(StackType::Stock))?;
    card.is_face_up = true;
    state
        .stack_mut(StackType::Waste)
        .ok_or(IllegalMoveReason::UnknownStack(StackType::Waste))?
        .push(card.clone());
    debug!("StockSystem: {} をめくったよ", card);
    Ok(card)
}

/// 捨て札を全部裏返して山札に戻す。
/// 捨て札の一番上が山札の一番下になるので、次にめくる順番は最初と同じ！
fn reset_waste_to_stock(state: &mut GameState) -> Result<usize, SolitaireError> {
    let waste = state
        .stack_mut(StackType::Waste)
        .ok_or(IllegalMoveReason::UnknownStack(StackType::Waste))?
        .take_all();
    let count = waste.len();
    let stock = state
        .stack_mut(StackType::Stock)
        .ok_or(IllegalMoveReason::UnknownStack(StackType::Stock))?;
    for mut card in waste.into_iter().rev() {
        card.is_face_up = false;
        stock.push(card);
    }
    info!("StockSystem: 捨て札 {} 枚を山札に戻したよ 🔄", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::components::game_state::GameStatus;
    use crate::logic::deck::shuffled_deck_from_seed;
    use crate::systems::deal_system::DealInitialCardsSystem;

    fn dealt_state() -> GameState {
        DealInitialCardsSystem::default()
            .execute(shuffled_deck_from_seed(11), 11, 0.0)
            .unwrap()
    }

    #[test]
    fn test_draw_moves_top_card_face_up() {
        let mut state = dealt_state();
        let expected = state.stock().top().unwrap().clone();

        let outcome = StockSystem::new().draw(&mut state).unwrap();

        let mut drawn = expected.clone();
        drawn.is_face_up = true;
        assert_eq!(outcome, DrawOutcome::Drew { card: drawn.clone() });
        assert_eq!(state.waste().top(), Some(&drawn));
        assert_eq!(state.stock().len(), 23);
        assert_eq!(state.move_count(), 0, "山札めくりは手数に数えない");
        assert_eq!(state.verify_integrity(), Ok(()));
    }

    #[test]
    fn test_recycle_restores_original_order() {
        let mut state = dealt_state();
        let original: Vec<Card> = state.stock().cards().to_vec();
        let mut system = StockSystem::new();

        for _ in 0..original.len() {
            assert!(matches!(system.draw(&mut state).unwrap(), DrawOutcome::Drew { .. }));
        }
        assert!(state.stock().is_empty());

        let outcome = system.draw(&mut state).unwrap();
        assert_eq!(outcome, DrawOutcome::Recycled { cards: 24 });
        assert!(state.waste().is_empty());
        assert_eq!(state.stock().cards(), original.as_slice(), "戻したあとは最初と同じ並び・全部裏向き");
    }

    #[test]
    fn test_draw_with_both_empty_does_nothing() {
        let mut state = GameState::empty(0, 0.0);
        let before = state.clone();
        assert_eq!(StockSystem::new().draw(&mut state), Ok(DrawOutcome::Empty));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_after_win_is_rejected() {
        let mut state = GameState::empty(0, 0.0);
        state
            .stack_mut(StackType::Stock)
            .unwrap()
            .push(Card::new(Suit::Club, Rank::Three));
        state.set_status(GameStatus::Won);
        assert_eq!(StockSystem::new().draw(&mut state), Err(SolitaireError::GameFinished));
        assert_eq!(state.stock().len(), 1);
    }
}
