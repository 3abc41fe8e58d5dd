// src/logic/invariants.rs
//! ゲーム状態の整合性チェックだよ！🔍
//!
//! どんな手を指しても、52枚のカードがどこかの山にちょうど1回ずつある。
//! これが崩れたらエンジンのバグなので、見つけたら大きな声で報告する。

use itertools::Itertools;

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::components::stack::CardStack;
use crate::config::rules::DECK_SIZE;
use crate::error::InvariantViolation;

/// 全部のチェックを順番に実行する。最初に見つかった違反を返すよ。
pub fn check_integrity(state: &GameState) -> Result<(), InvariantViolation> {
    check_card_conservation(state)?;
    check_face_orientation(state)?;
    state.foundations().iter().try_for_each(check_foundation_sequence)
}

/// 52枚がちょうど1回ずつあるか。
pub fn check_card_conservation(state: &GameState) -> Result<(), InvariantViolation> {
    let all_cards: Vec<&Card> = state.stacks().flat_map(|stack| stack.cards()).collect();

    if let Some(duplicate) = all_cards.iter().duplicates_by(|card| card.identity()).next() {
        return Err(InvariantViolation::DuplicateCard((*duplicate).clone()));
    }
    if all_cards.len() != DECK_SIZE {
        return Err(InvariantViolation::WrongCardCount {
            found: all_cards.len(),
        });
    }
    Ok(())
}

/// 山札は全部裏、捨て札と組札は全部表。
pub fn check_face_orientation(state: &GameState) -> Result<(), InvariantViolation> {
    if let Some(card) = state.stock().cards().iter().find(|card| card.is_face_up) {
        return Err(InvariantViolation::FaceUpInStock(card.clone()));
    }
    for stack in std::iter::once(state.waste()).chain(state.foundations().iter()) {
        if let Some(card) = stack.cards().iter().find(|card| !card.is_face_up) {
            return Err(InvariantViolation::FaceDownInPile {
                stack: stack.stack_type(),
                card: card.clone(),
            });
        }
    }
    Ok(())
}

/// 組札が A から始まる同じスートの昇順になっているか。
fn check_foundation_sequence(foundation: &CardStack) -> Result<(), InvariantViolation> {
    let cards = foundation.cards();
    let starts_with_ace = cards.first().map_or(true, |card| card.rank == Rank::Ace);
    let ascending = cards
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| lower.suit == upper.suit && upper.rank.is_one_above(lower.rank));

    if starts_with_ace && ascending {
        Ok(())
    } else {
        Err(InvariantViolation::BrokenFoundation(foundation.stack_type()))
    }
}
