// src/systems/move_card_system.rs

use log::{debug, error, info, warn};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::error::{IllegalMoveReason, SolitaireError};
use crate::logic::rules::check_move;
use crate::systems::win_condition_system::WinConditionSystem;

/// 移動がうまくいったときの結果。描画側はこれを見てアニメーションとかを決める。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 動いたカードの枚数。
    pub cards_moved: usize,
    /// 移動元の場札で新しく表になったカード (あれば)。
    pub revealed_card: Option<Card>,
    /// この移動でクリアしたか。
    pub won: bool,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どの山の何枚目から」「どの山へ」を受け取って、
/// 1. ルールチェック (ダメなら状態はそのまま、理由つきでエラー)
/// 2. 列をまとめて移動 (順番はそのまま)
/// 3. 移動元の場札の一番上が裏向きになったら表にする
/// 4. 手数 +1
/// 5. 勝利判定
///
/// の順に処理する。
#[derive(Default)]
pub struct MoveCardSystem {
    win_condition: WinConditionSystem,
}

impl MoveCardSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_move(
        &self,
        state: &mut GameState,
        source: StackType,
        source_index: usize,
        destination: StackType,
    ) -> Result<MoveOutcome, SolitaireError> {
        if let Err(reason) = check_move(state, source, source_index, destination) {
            warn!("MoveCardSystem: ルール違反！移動できませんでした 🙅 {}[{}] -> {}: {}", source, source_index, destination, reason);
            return Err(SolitaireError::IllegalMove(reason));
        }

        // --- 移動 ---
        let run = state
            .stack_mut(source)
            .ok_or(IllegalMoveReason::UnknownStack(source))?
            .split_off(source_index);
        let cards_moved = run.len();
        state
            .stack_mut(destination)
            .ok_or(IllegalMoveReason::UnknownStack(destination))?
            .extend(run);

        // --- めくり ---
        let revealed_card = if source.is_tableau() {
            reveal_top_card(state, source)
        } else {
            None
        };

        state.increment_move_count();
        self.win_condition.check(state);

        if cfg!(debug_assertions) {
            if let Err(e) = state.verify_integrity() {
                error!("MoveCardSystem: 状態が壊れた！🐛 {}", e);
                panic!("game state integrity violated after move: {}", e);
            }
        }

        info!(
            "MoveCardSystem: {}枚 {}[{}] -> {} (moves: {})",
            cards_moved,
            source,
            source_index,
            destination,
            state.move_count()
        );

        Ok(MoveOutcome {
            cards_moved,
            revealed_card,
            won: state.is_won(),
        })
    }
}

/// 場札の一番上が裏向きだったら表にして、そのカードを返す。
fn reveal_top_card(state: &mut GameState, column: StackType) -> Option<Card> {
    let top = state.stack_mut(column)?.top_mut()?;
    if top.is_face_up {
        return None;
    }
    top.is_face_up = true;
    debug!("MoveCardSystem: {} の一番上 {} を表にしたよ 👀", column, top);
    Some(top.clone())
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit, ALL_RANKS, ALL_SUITS};
    use crate::components::game_state::GameStatus;

    fn put(state: &mut GameState, stack_type: StackType, cards: &[Card]) {
        let stack = state.stack_mut(stack_type).unwrap();
        for card in cards {
            stack.push(card.clone());
        }
    }

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    /// 52枚全部を使った、整合性の取れた局面を作る。
    /// `placed` に書いたカード以外は全部山札 (裏向き) に入れるよ。
    fn full_state(placed: &[(StackType, Card)]) -> GameState {
        let mut state = GameState::empty(0, 0.0);
        for (stack_type, card) in placed {
            put(&mut state, *stack_type, &[card.clone()]);
        }
        for &suit in ALL_SUITS.iter() {
            for &rank in ALL_RANKS.iter() {
                if !placed.iter().any(|(_, c)| c.suit == suit && c.rank == rank) {
                    put(&mut state, StackType::Stock, &[Card::new(suit, rank)]);
                }
            }
        }
        state
    }

    #[test]
    fn test_move_run_onto_red_eight_keeps_order() {
        // 列0: 裏向き♦K + ♠7 ❤️6 ♣5、列1: ❤️8
        let mut state = full_state(&[
            (StackType::Tableau(0), Card::new(Suit::Diamond, Rank::King)),
            (StackType::Tableau(0), up(Suit::Spade, Rank::Seven)),
            (StackType::Tableau(0), up(Suit::Heart, Rank::Six)),
            (StackType::Tableau(0), up(Suit::Club, Rank::Five)),
            (StackType::Tableau(1), up(Suit::Heart, Rank::Eight)),
        ]);

        let outcome = MoveCardSystem::new()
            .apply_move(&mut state, StackType::Tableau(0), 1, StackType::Tableau(1))
            .unwrap();

        assert_eq!(outcome.cards_moved, 3);
        let ranks: Vec<Rank> = state.tableau(1).unwrap().cards().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]);

        // 残った♦K は表になる
        assert_eq!(outcome.revealed_card, Some(up(Suit::Diamond, Rank::King)));
        assert!(state.tableau(0).unwrap().top().unwrap().is_face_up);
        assert_eq!(state.move_count(), 1);
        assert!(!outcome.won);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut state = full_state(&[
            (StackType::Tableau(0), up(Suit::Spade, Rank::Seven)),
            (StackType::Tableau(1), up(Suit::Club, Rank::Eight)),
        ]);
        let before = state.clone();

        let result = MoveCardSystem::new().apply_move(&mut state, StackType::Tableau(0), 0, StackType::Tableau(1));
        assert_eq!(result, Err(SolitaireError::IllegalMove(IllegalMoveReason::SameColor)));
        assert_eq!(state, before, "失敗した移動で状態が変わってはいけない！");
    }

    #[test]
    fn test_face_up_card_below_is_not_reported() {
        let mut state = full_state(&[
            (StackType::Tableau(0), up(Suit::Heart, Rank::Nine)),
            (StackType::Tableau(0), up(Suit::Spade, Rank::Ace)),
        ]);
        let outcome = MoveCardSystem::new()
            .apply_move(&mut state, StackType::Tableau(0), 1, StackType::Foundation(2))
            .unwrap();
        assert_eq!(outcome.revealed_card, None);
        assert_eq!(state.foundation(2).unwrap().len(), 1);
    }

    #[test]
    fn test_last_card_to_foundation_wins() {
        // ♦K 以外の51枚が組札、♦K は捨て札
        let mut state = GameState::empty(0, 0.0);
        for (i, &suit) in ALL_SUITS.iter().enumerate() {
            for &rank in ALL_RANKS.iter() {
                let card = up(suit, rank);
                if suit == Suit::Diamond && rank == Rank::King {
                    put(&mut state, StackType::Waste, &[card]);
                } else {
                    put(&mut state, StackType::Foundation(i as u8), &[card]);
                }
            }
        }

        let system = MoveCardSystem::new();
        let outcome = system
            .apply_move(&mut state, StackType::Waste, 0, StackType::Foundation(3))
            .unwrap();
        assert!(outcome.won);
        assert_eq!(state.status(), GameStatus::Won);

        // クリア後はどんな移動も失敗する
        let result = system.apply_move(&mut state, StackType::Foundation(3), 12, StackType::Tableau(0));
        assert_eq!(result, Err(SolitaireError::IllegalMove(IllegalMoveReason::GameAlreadyWon)));
        assert_eq!(state.move_count(), 1);
    }
}
