// src/systems/deal_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::config::rules::{DECK_SIZE, NUM_TABLEAU_COLUMNS, TABLEAU_DEAL_SIZE};
use crate::error::{IllegalMoveReason, InvariantViolation, SolitaireError};

// === 初期カード配置システム！ ===
// シャッフル済みのデッキを受け取って、7つの場札と山札に配るよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 場札の列 j (0〜6) ごとに、j+1 枚をデッキの末尾から取って積む。
    ///    最後に積んだ1枚 (i == j のとき) だけ表向き、あとは裏向き。
    /// 2. 残った24枚はそのままの順番で山札へ。全部裏向き。
    /// 3. 組札と捨て札は空っぽでスタート。
    ///
    /// デッキが52枚じゃなかったら `InvariantViolation` を返す。
    pub fn execute(
        &self,
        mut deck: Vec<Card>,
        seed: u64,
        start_time_ms: f64,
    ) -> Result<GameState, SolitaireError> {
        if deck.len() != DECK_SIZE {
            return Err(InvariantViolation::WrongCardCount { found: deck.len() }.into());
        }

        let mut state = GameState::empty(seed, start_time_ms);

        // --- 場札 (Tableau) への配置 ---
        for column in 0..NUM_TABLEAU_COLUMNS {
            let stack_type = StackType::Tableau(column as u8);
            for round in 0..=column {
                let mut card = deck.pop().ok_or(InvariantViolation::WrongCardCount {
                    found: DECK_SIZE - deck.len(),
                })?;
                // その列の最後に置くカードだけ表向きにするよ！👀
                card.is_face_up = round == column;
                state
                    .stack_mut(stack_type)
                    .ok_or(IllegalMoveReason::UnknownStack(stack_type))?
                    .push(card);
            }
            debug!("Dealt {} cards to {}", column + 1, stack_type);
        }

        // --- 山札 (Stock) への配置 ---
        let stock_size = deck.len();
        let stock = state
            .stack_mut(StackType::Stock)
            .ok_or(IllegalMoveReason::UnknownStack(StackType::Stock))?;
        for mut card in deck {
            card.is_face_up = false;
            stock.push(card);
        }

        info!(
            "Initial deal complete (seed {}): {} tableau cards, {} in stock",
            seed, TABLEAU_DEAL_SIZE, stock_size
        );
        Ok(state)
    }
}
