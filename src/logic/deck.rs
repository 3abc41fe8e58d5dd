// src/logic/deck.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート順 (♠, ♥, ♣, ♦) × ランク順 (A〜K) で並んでいて、全部裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates そのもの (末尾から先頭へ、
/// `[0, i]` の一様乱数の位置と入れ替え)。乱数生成器を外から渡すので、
/// シード付きの `StdRng` を渡せば毎回同じ並びになる！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シード値からシャッフル済みのデッキを作る。同じシードなら必ず同じ並び🎲
pub fn shuffled_deck_from_seed(seed: u64) -> Vec<Card> {
    let mut deck = create_standard_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_deck(&mut deck, &mut rng);
    deck
}

/// シードが指定されなかったとき用のランダムなシード。
pub fn random_seed() -> u64 {
    rand::thread_rng().gen()
}
