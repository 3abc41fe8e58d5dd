// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::config::rules::{NUM_FOUNDATIONS, NUM_TABLEAU_COLUMNS};
use crate::error::SolitaireError;

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札にあるのか、場札の何列目にあるのか、などを区別するよ。
///
/// JSON にするとこんな感じ: `"Stock"`, `"Waste"`, `{"Tableau":3}`, `{"Foundation":0}`。
/// JS 側から移動リクエストを送るときもこの形で送ってもらう！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つあって、番号 (0-3) を持つ。
    /// どのスートの組札になるかは、最初に置かれたエースで決まるよ。
    Foundation(u8),
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl StackType {
    /// 全部の置き場 (山札, 捨て札, 組札×4, 場札×7) を順番に返す。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..NUM_FOUNDATIONS as u8).map(StackType::Foundation))
            .chain((0..NUM_TABLEAU_COLUMNS as u8).map(StackType::Tableau))
    }

    /// インデックスが範囲内か？ (`Tableau(9)` みたいなのは存在しない)
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Tableau(i) => (i as usize) < NUM_TABLEAU_COLUMNS,
            StackType::Foundation(i) => (i as usize) < NUM_FOUNDATIONS,
            StackType::Stock | StackType::Waste => true,
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(i) => write!(f, "tableau-{}", i),
            StackType::Foundation(i) => write!(f, "foundation-{}", i),
            StackType::Stock => write!(f, "stock"),
            StackType::Waste => write!(f, "waste"),
        }
    }
}

/// カードの山ひとつ分だよ！🗂️
///
/// `cards[0]` が一番下、`cards.last()` が一番上 (末尾)。
/// 追加も取り出しも末尾だけ。ただし場札だけは、途中から末尾までの
/// 「列 (run)」をまとめて取り出せる (`split_off`)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStack {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl CardStack {
    /// 空の山を作る。
    pub fn new(stack_type: StackType) -> Self {
        Self {
            stack_type,
            cards: Vec::new(),
        }
    }

    /// カードを入れた状態で作る。
    pub fn with_cards(stack_type: StackType, cards: Vec<Card>) -> Self {
        Self { stack_type, cards }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    /// 下から順に並んだカード。描画側はこれをそのまま使えばOK。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// 一番上のカード (なければ `None`)。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 一番上のカード。空なら `EmptyStack` エラーを返すバージョン。
    pub fn try_top(&self) -> Result<&Card, SolitaireError> {
        self.top().ok_or(SolitaireError::EmptyStack(self.stack_type))
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// `index` から末尾までの列。範囲外なら空スライス。
    pub fn run_from(&self, index: usize) -> &[Card] {
        self.cards.get(index..).unwrap_or(&[])
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `index` から末尾までをまとめて取り出す。順番はそのまま！
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// 取り出した列を末尾に積む。順番はそのまま！
    pub(crate) fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// 全部取り出して空にする。
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn all_stack_types_are_thirteen_and_valid() {
        let all: Vec<StackType> = StackType::all().collect();
        assert_eq!(all.len(), 13);
        assert!(all.iter().all(|s| s.is_valid()));
        assert!(!StackType::Tableau(7).is_valid());
        assert!(!StackType::Foundation(4).is_valid());
    }

    #[test]
    fn stack_type_json_shape() {
        assert_eq!(serde_json::to_string(&StackType::Stock).unwrap(), r#""Stock""#);
        assert_eq!(serde_json::to_string(&StackType::Tableau(3)).unwrap(), r#"{"Tableau":3}"#);
        let parsed: StackType = serde_json::from_str(r#"{"Foundation":2}"#).unwrap();
        assert_eq!(parsed, StackType::Foundation(2));
    }

    #[test]
    fn split_off_keeps_order() {
        let mut stack = CardStack::with_cards(
            StackType::Tableau(0),
            vec![
                Card::new(Suit::Heart, Rank::King),
                Card::face_up(Suit::Spade, Rank::Seven),
                Card::face_up(Suit::Heart, Rank::Six),
            ],
        );
        let run = stack.split_off(1);
        assert_eq!(stack.len(), 1);
        assert_eq!(run[0].rank, Rank::Seven);
        assert_eq!(run[1].rank, Rank::Six);

        let mut other = CardStack::new(StackType::Tableau(1));
        other.extend(run);
        assert_eq!(other.top().map(|c| c.rank), Some(Rank::Six));
    }

    #[test]
    fn try_top_on_empty_stack_is_typed_error() {
        let stack = CardStack::new(StackType::Waste);
        assert_eq!(stack.try_top(), Err(SolitaireError::EmptyStack(StackType::Waste)));
        assert!(stack.run_from(3).is_empty());
    }
}
