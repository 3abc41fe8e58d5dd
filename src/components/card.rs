// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JS 側に渡すときに JSON にするよ！
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♣️♦️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Heart,   // ❤️
    Club,    // ♣️
    Diamond, // ♦️
}

/// デッキを作るときのスートの順番。
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

impl Suit {
    /// 表示用の記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Club => '♣',
            Suit::Diamond => '♦',
        }
    }

    /// スートの色。ハートとダイヤは赤、スペードとクラブは黒！
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// カードの色（赤か黒か）。場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から始まるので、`rank.value()` でそのまま 1〜13 の数値になる。
/// PartialOrd, Ord もあるから `<` や `>` で大小比較もできるよ👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// デッキを作るときのランクの順番。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// A=1 … K=13 の数値。隣り合っているかのチェックに使う。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 表示用のラベル ("A", "2", ..., "10", "J", "Q", "K")。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// `self` が `other` のちょうど1つ上か？ (例: 8 は 7 のひとつ上)
    pub fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

/// カードそのものを表すよ！🃏
///
/// - `suit` と `rank` がカードの「正体」。ゲーム中に変わることはない。
/// - `is_face_up` だけは変わる (めくったり、山札に戻したり)。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
        }
    }

    /// 表向きのカードを作る (主にテスト用)。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: true,
        }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// カードの正体 (スート, ランク) だけを取り出す。表裏は関係なし。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
