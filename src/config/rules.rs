// src/config/rules.rs
//! クロンダイクのルールに関する定数を定義するよ！
//! 山の数とか、デッキの枚数とか。

/// 1組のデッキの枚数。
pub const DECK_SIZE: usize = 52;
/// 1スートあたりのランク数 (A〜K)。
pub const RANKS_PER_SUIT: usize = 13;
/// 組札 (Foundation) の数。スートごとに1つ。
pub const NUM_FOUNDATIONS: usize = 4;
/// 場札 (Tableau) の列数。
pub const NUM_TABLEAU_COLUMNS: usize = 7;
/// 初期配置で場札に配られる枚数 (1+2+...+7)。
pub const TABLEAU_DEAL_SIZE: usize = NUM_TABLEAU_COLUMNS * (NUM_TABLEAU_COLUMNS + 1) / 2;
/// 初期配置後に山札 (Stock) に残る枚数。
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - TABLEAU_DEAL_SIZE;
