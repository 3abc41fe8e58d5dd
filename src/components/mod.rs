// src/components/mod.rs

// ゲームのデータ部品たち！ カード、山、ゲーム全体の状態。
pub mod card;
pub mod game_state;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use stack::{CardStack, StackType};
