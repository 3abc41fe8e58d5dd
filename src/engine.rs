// src/engine.rs
//! エンジンの入口だよ！🚪
//!
//! ホスト (JS 側の `SolitaireApp` とか) はここの関数だけ呼べばOK。
//! `GameState` は呼び出し側が1つだけ持っていて、毎回それを渡してもらう。

use log::info;

use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::{IllegalMoveReason, SolitaireError};
use crate::logic::deck::{random_seed, shuffled_deck_from_seed};
use crate::logic::rules;
use crate::systems::deal_system::DealInitialCardsSystem;
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};
use crate::systems::stock_system::{DrawOutcome, StockSystem};

/// 新しいゲームを配る。シードを渡さなければランダムに決めるよ🎲
pub fn new_game(seed: Option<u64>, start_time_ms: f64) -> Result<GameState, SolitaireError> {
    let seed = seed.unwrap_or_else(random_seed);
    let deck = shuffled_deck_from_seed(seed);
    let state = DealInitialCardsSystem::default().execute(deck, seed, start_time_ms)?;
    info!("New game started with seed {}", seed);
    Ok(state)
}

/// その移動がルール上OKか。何回呼んでも同じ答えで、状態は変えない。
pub fn is_legal_move(state: &GameState, source: StackType, source_index: usize, destination: StackType) -> bool {
    rules::is_move_valid(state, source, source_index, destination)
}

/// `is_legal_move` の理由つき版。
pub fn check_move(
    state: &GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> Result<(), IllegalMoveReason> {
    rules::check_move(state, source, source_index, destination)
}

/// 移動を実行する。ダメなら状態はそのままでエラー。
pub fn apply_move(
    state: &mut GameState,
    source: StackType,
    source_index: usize,
    destination: StackType,
) -> Result<MoveOutcome, SolitaireError> {
    MoveCardSystem::new().apply_move(state, source, source_index, destination)
}

/// 山札をクリックしたとき。
pub fn draw_from_stock(state: &mut GameState) -> Result<DrawOutcome, SolitaireError> {
    StockSystem::new().draw(state)
}

pub fn is_won(state: &GameState) -> bool {
    state.is_won()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;
    use crate::config::rules::DECK_SIZE;
    use proptest::prelude::*;

    #[test]
    fn same_seed_gives_same_layout() {
        let a = new_game(Some(12345), 0.0).unwrap();
        let b = new_game(Some(12345), 500.0).unwrap();
        assert_eq!(a.stock(), b.stock());
        assert_eq!(a.tableau_columns(), b.tableau_columns());
        assert_eq!(a.seed(), 12345);
        assert_eq!(b.start_time_ms(), 500.0);
    }

    #[test]
    fn random_game_records_its_seed() {
        let state = new_game(None, 0.0).unwrap();
        let replay = new_game(Some(state.seed()), 0.0).unwrap();
        assert_eq!(state, replay);
    }

    #[test]
    fn fresh_game_is_playing_and_consistent() {
        let state = new_game(Some(1), 0.0).unwrap();
        assert!(!is_won(&state));
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.verify_integrity(), Ok(()));
        assert_eq!(
            state.top_card(StackType::Waste),
            Err(SolitaireError::EmptyStack(StackType::Waste))
        );
    }

    #[test]
    fn stock_source_always_fails() {
        let state = new_game(Some(5), 0.0).unwrap();
        for destination in StackType::all() {
            assert!(!is_legal_move(&state, StackType::Stock, 23, destination));
        }
    }

    #[test]
    fn face_down_tableau_cards_never_move() {
        let state = new_game(Some(9), 0.0).unwrap();
        for column in 1..7u8 {
            for destination in StackType::all() {
                assert!(
                    check_move(&state, StackType::Tableau(column), 0, destination).is_err(),
                    "裏向きの {} [0] は動かせない",
                    StackType::Tableau(column)
                );
            }
        }
    }

    #[test]
    fn draw_then_play_waste_card() {
        let mut state = new_game(Some(42), 0.0).unwrap();
        let drawn = match draw_from_stock(&mut state).unwrap() {
            DrawOutcome::Drew { card } => card,
            other => panic!("1枚めくれるはず: {:?}", other),
        };
        assert_eq!(state.top_card(StackType::Waste), Ok(&drawn));

        let legal: Vec<StackType> = StackType::all()
            .filter(|&d| is_legal_move(&state, StackType::Waste, 0, d))
            .collect();
        for destination in legal {
            let mut copy = state.clone();
            let outcome = apply_move(&mut copy, StackType::Waste, 0, destination).unwrap();
            assert_eq!(outcome.cards_moved, 1);
            assert_eq!(copy.move_count(), 1);
            assert_eq!(copy.top_card(destination), Ok(&drawn));
        }
    }

    #[test]
    fn only_aces_go_to_an_empty_foundation() {
        let state = new_game(Some(3), 0.0).unwrap();
        for column in 0..7u8 {
            let source = StackType::Tableau(column);
            let top = state.top_card(source).unwrap();
            let index = state.tableau(column as usize).unwrap().len() - 1;
            assert_eq!(
                is_legal_move(&state, source, index, StackType::Foundation(0)),
                top.rank == Rank::Ace,
                "{} を空の組札へ",
                top
            );
        }
    }

    // --- ランダムに遊んでもカードは消えない・増えない ---

    /// 1手分の行動。proptest にランダムに選ばせる。
    #[derive(Debug, Clone)]
    enum Action {
        Draw,
        Move { source: u8, index: usize, destination: u8 },
    }

    fn stack_from_index(i: u8) -> StackType {
        StackType::all().nth(i as usize % 13).unwrap_or(StackType::Stock)
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            1 => Just(Action::Draw),
            4 => (0u8..13, 0usize..20, 0u8..13).prop_map(|(source, index, destination)| Action::Move {
                source,
                index,
                destination,
            }),
        ]
    }

    proptest! {
        #[test]
        fn random_play_conserves_cards(
            seed in any::<u64>(),
            actions in prop::collection::vec(action_strategy(), 0..200),
        ) {
            let mut state = new_game(Some(seed), 0.0).unwrap();
            for action in actions {
                match action {
                    Action::Draw => {
                        let _ = draw_from_stock(&mut state);
                    }
                    Action::Move { source, index, destination } => {
                        let source = stack_from_index(source);
                        let destination = stack_from_index(destination);
                        let before = state.clone();
                        let legal = is_legal_move(&state, source, index, destination);
                        // 判定は純粋: 2回聞いても同じ、状態も変わらない
                        prop_assert_eq!(legal, is_legal_move(&state, source, index, destination));
                        prop_assert_eq!(&state, &before);

                        let result = apply_move(&mut state, source, index, destination);
                        prop_assert_eq!(result.is_ok(), legal);
                        if !legal {
                            prop_assert_eq!(&state, &before);
                        }
                    }
                }
                let total: usize = state.stacks().map(|s| s.len()).sum();
                prop_assert_eq!(total, DECK_SIZE);
                prop_assert_eq!(state.verify_integrity(), Ok(()));
            }
        }
    }
}
