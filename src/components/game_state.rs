// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{CardStack, StackType};
use crate::config::rules::{NUM_FOUNDATIONS, NUM_TABLEAU_COLUMNS};
use crate::error::{IllegalMoveReason, SolitaireError};
use crate::logic::invariants;

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 これ以降はカードを動かせない。
    Won,
}

/// 1ゲーム分の状態をまるごと持つ構造体だよ！
///
/// 山札・捨て札・組札×4・場札×7 の全部の山と、手数、開始時刻、シード値。
/// ホスト (JS 側) はこれを1つだけ持っていて、「新しいゲーム」で丸ごと作り直す。
/// 山の中身を書き換えられるのはエンジンのシステムだけ (`pub(crate)`)。
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    status: GameStatus,
    stock: CardStack,
    waste: CardStack,
    foundations: [CardStack; NUM_FOUNDATIONS],
    tableau: [CardStack; NUM_TABLEAU_COLUMNS],
    move_count: u32,
    start_time_ms: f64,
    seed: u64,
}

impl GameState {
    /// 全部の山が空っぽの状態。ディーラーがここにカードを配っていく。
    pub(crate) fn empty(seed: u64, start_time_ms: f64) -> Self {
        Self {
            status: GameStatus::Playing,
            stock: CardStack::new(StackType::Stock),
            waste: CardStack::new(StackType::Waste),
            foundations: std::array::from_fn(|i| CardStack::new(StackType::Foundation(i as u8))),
            tableau: std::array::from_fn(|i| CardStack::new(StackType::Tableau(i as u8))),
            move_count: 0,
            start_time_ms,
            seed,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn start_time_ms(&self) -> f64 {
        self.start_time_ms
    }

    /// このゲームを配ったときのシード値。同じシードなら同じ配置になる。
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stock(&self) -> &CardStack {
        &self.stock
    }

    pub fn waste(&self) -> &CardStack {
        &self.waste
    }

    pub fn foundations(&self) -> &[CardStack] {
        &self.foundations
    }

    pub fn tableau_columns(&self) -> &[CardStack] {
        &self.tableau
    }

    pub fn foundation(&self, index: usize) -> Option<&CardStack> {
        self.foundations.get(index)
    }

    pub fn tableau(&self, index: usize) -> Option<&CardStack> {
        self.tableau.get(index)
    }

    /// 置き場の種類から山を引く。存在しないインデックスなら `None`。
    pub fn stack(&self, stack_type: StackType) -> Option<&CardStack> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    pub(crate) fn stack_mut(&mut self, stack_type: StackType) -> Option<&mut CardStack> {
        match stack_type {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    /// 全部の山を (山札, 捨て札, 組札, 場札) の順に。
    pub fn stacks(&self) -> impl Iterator<Item = &CardStack> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    /// 指定した山の一番上のカード。
    /// 空なら `EmptyStack`、存在しない山なら `IllegalMove(UnknownStack)`。
    pub fn top_card(&self, stack_type: StackType) -> Result<&Card, SolitaireError> {
        self.stack(stack_type)
            .ok_or(SolitaireError::IllegalMove(IllegalMoveReason::UnknownStack(stack_type)))?
            .try_top()
    }

    /// 組札に乗っているカードの合計枚数。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(CardStack::len).sum()
    }

    /// 開始からの経過秒数。`now_ms` はホストの時計 (`Date.now()`) を渡してね。
    /// 状態は一切変えない！
    pub fn elapsed_seconds(&self, now_ms: f64) -> u64 {
        let elapsed_ms = (now_ms - self.start_time_ms).max(0.0);
        (elapsed_ms / 1000.0).floor() as u64
    }

    /// カードの総数・重複・表裏の整合性をチェックする。
    pub fn verify_integrity(&self) -> Result<(), SolitaireError> {
        invariants::check_integrity(self).map_err(SolitaireError::from)
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

/// 経過秒数をタイマー表示 `"m:ss"` にする。
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
