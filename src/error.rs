// src/error.rs
//! エンジン全体で使うエラー型をまとめるよ！🚨
//!
//! - `IllegalMove`: ルール違反の移動。状態は変わらないので、別の手を試せばOK。
//! - `EmptyStack`: 空の山の一番上を見ようとした。「カードなし」ってだけ。
//! - `GameFinished`: もう勝ってるのに山札をめくろうとした。
//! - `InvariantViolation`: カードが消えた・増えた等のエンジン内部のバグ。致命的！

use std::fmt;

use serde::Serialize;

use crate::components::card::Card;
use crate::components::stack::StackType;

/// 移動が拒否された理由。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IllegalMoveReason {
    /// 既にクリア済み。これ以上は動かせない。
    GameAlreadyWon,
    /// 存在しない置き場 (`Tableau(9)` とか)。
    UnknownStack(StackType),
    /// 山札のカードは直接動かせない (めくるだけ)。
    SourceIsStock,
    /// 移動元と移動先が同じ山。
    SameStack,
    /// 移動元のインデックスにカードがない。
    SourceIndexOutOfRange { index: usize, len: usize },
    /// 裏向きのカードは掴めない。
    SourceCardFaceDown,
    /// 捨て札・組札からは一番上の1枚しか動かせない。
    NotTopCard,
    /// 列が「色違い・1つずつ下がる」になっていない。
    BrokenRun,
    /// 移動先が山札か捨て札。
    InvalidDestination(StackType),
    /// 組札には1枚ずつしか置けない。
    MultipleCardsToFoundation,
    /// 空の組札にはエースしか置けない。
    NotAnAce,
    /// 空の場札にはキングしか置けない。
    NotAKing,
    /// 組札のスートと違う。
    SuitMismatch,
    /// 場札の一番上と同じ色。
    SameColor,
    /// ランクがつながっていない。
    RankNotAdjacent,
    /// 移動先の一番上が裏向き。
    DestinationFaceDown,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::GameAlreadyWon => write!(f, "the game is already won"),
            IllegalMoveReason::UnknownStack(stack) => write!(f, "unknown stack {:?}", stack),
            IllegalMoveReason::SourceIsStock => write!(f, "stock cards can only be drawn"),
            IllegalMoveReason::SameStack => write!(f, "source and destination are the same stack"),
            IllegalMoveReason::SourceIndexOutOfRange { index, len } => {
                write!(f, "source index {} is out of range (stack has {} cards)", index, len)
            }
            IllegalMoveReason::SourceCardFaceDown => write!(f, "the source card is face down"),
            IllegalMoveReason::NotTopCard => {
                write!(f, "only the top card can move from waste or foundation")
            }
            IllegalMoveReason::BrokenRun => {
                write!(f, "the run is not an alternating-color descending sequence")
            }
            IllegalMoveReason::InvalidDestination(stack) => {
                write!(f, "cards cannot be dropped on {}", stack)
            }
            IllegalMoveReason::MultipleCardsToFoundation => {
                write!(f, "only one card at a time can go to a foundation")
            }
            IllegalMoveReason::NotAnAce => write!(f, "an empty foundation only accepts an ace"),
            IllegalMoveReason::NotAKing => write!(f, "an empty tableau column only accepts a king"),
            IllegalMoveReason::SuitMismatch => write!(f, "the suit does not match the foundation"),
            IllegalMoveReason::SameColor => write!(f, "colors must alternate on the tableau"),
            IllegalMoveReason::RankNotAdjacent => write!(f, "the ranks are not adjacent"),
            IllegalMoveReason::DestinationFaceDown => {
                write!(f, "the destination top card is face down")
            }
        }
    }
}

/// エンジン内部の不整合。これが出たらバグ！🐛
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InvariantViolation {
    /// カードの総数が52枚じゃない。
    WrongCardCount { found: usize },
    /// 同じカードが2か所以上にある。
    DuplicateCard(Card),
    /// 山札に表向きのカードがある。
    FaceUpInStock(Card),
    /// 捨て札・組札に裏向きのカードがある。
    FaceDownInPile { stack: StackType, card: Card },
    /// 組札の並びが壊れている。
    BrokenFoundation(StackType),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::WrongCardCount { found } => {
                write!(f, "expected 52 cards in play, found {}", found)
            }
            InvariantViolation::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
            InvariantViolation::FaceUpInStock(card) => write!(f, "card {} is face up in the stock", card),
            InvariantViolation::FaceDownInPile { stack, card } => {
                write!(f, "card {} is face down in {}", card, stack)
            }
            InvariantViolation::BrokenFoundation(stack) => {
                write!(f, "{} is not an ascending same-suit sequence", stack)
            }
        }
    }
}

/// エンジンのエラー型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SolitaireError {
    IllegalMove(IllegalMoveReason),
    EmptyStack(StackType),
    GameFinished,
    InvariantViolation(InvariantViolation),
}

impl fmt::Display for SolitaireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolitaireError::IllegalMove(reason) => write!(f, "illegal move: {}", reason),
            SolitaireError::EmptyStack(stack) => write!(f, "{} is empty", stack),
            SolitaireError::GameFinished => write!(f, "the game is finished"),
            SolitaireError::InvariantViolation(violation) => {
                write!(f, "invariant violation: {}", violation)
            }
        }
    }
}

impl std::error::Error for SolitaireError {}

impl From<IllegalMoveReason> for SolitaireError {
    fn from(reason: IllegalMoveReason) -> Self {
        SolitaireError::IllegalMove(reason)
    }
}

impl From<InvariantViolation> for SolitaireError {
    fn from(violation: InvariantViolation) -> Self {
        SolitaireError::InvariantViolation(violation)
    }
}
