// src/protocol.rs

// このファイルは、WASM (Rust) と JS ホストの間でやり取りする
// データの形式を定義するよ！💌
// `serde` で JSON にして渡す。キーは JS に合わせて camelCase！
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::CardStack;
use crate::error::SolitaireError;
use crate::systems::move_card_system::MoveOutcome;
use crate::systems::stock_system::DrawOutcome;

// StackType は JS から移動リクエストを送るときにも使うので、ここからも見えるようにしておく
pub use crate::components::stack::StackType;

/// カード1枚分の情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub suit: Suit,
    /// 1 (A) 〜 13 (K)
    pub rank: u8,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank.value(),
            is_face_up: card.is_face_up,
        }
    }
}

fn pile_data(stack: &CardStack) -> Vec<CardData> {
    stack.cards().iter().map(CardData::from).collect()
}

/// 描画用のゲーム状態スナップショット全体。
/// 各山は下から順 (最後の要素が一番上) に並んでいるよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameStateData {
    pub stock: Vec<CardData>,
    pub waste: Vec<CardData>,
    pub foundations: Vec<Vec<CardData>>,
    pub tableau: Vec<Vec<CardData>>,
    pub move_count: u32,
    pub start_time_ms: f64,
    /// JS の Number だと 2^53 を超えると丸まっちゃうので文字列で渡す。
    pub seed: String,
    pub status: GameStatus,
}

impl From<&GameState> for GameStateData {
    fn from(state: &GameState) -> Self {
        Self {
            stock: pile_data(state.stock()),
            waste: pile_data(state.waste()),
            foundations: state.foundations().iter().map(pile_data).collect(),
            tableau: state.tableau_columns().iter().map(pile_data).collect(),
            move_count: state.move_count(),
            start_time_ms: state.start_time_ms(),
            seed: state.seed().to_string(),
            status: state.status(),
        }
    }
}

/// `apply_move` / `auto_move_to_foundation` の結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub moved: bool,
    pub cards_moved: usize,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub destination: Option<StackType>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revealed_card: Option<CardData>,
    /// 動かせなかった理由 (人が読む用)。
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

impl MoveResponse {
    pub fn from_result(result: &Result<MoveOutcome, SolitaireError>, destination: StackType) -> Self {
        match result {
            Ok(outcome) => Self {
                moved: true,
                cards_moved: outcome.cards_moved,
                won: outcome.won,
                destination: Some(destination),
                revealed_card: outcome.revealed_card.as_ref().map(CardData::from),
                reason: None,
            },
            Err(e) => Self::rejected(e.to_string()),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// `draw_from_stock` の結果。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawResponse {
    Drew { card: CardData },
    Recycled { cards: usize },
    Empty,
}

impl From<&DrawOutcome> for DrawResponse {
    fn from(outcome: &DrawOutcome) -> Self {
        match outcome {
            DrawOutcome::Drew { card } => DrawResponse::Drew { card: card.into() },
            DrawOutcome::Recycled { cards } => DrawResponse::Recycled { cards: *cards },
            DrawOutcome::Empty => DrawResponse::Empty,
        }
    }
}
