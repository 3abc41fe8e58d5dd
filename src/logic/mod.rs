// src/logic/mod.rs
//! ゲームのロジック (判定・デッキ・整合性チェック) をまとめるモジュールだよ！🧠

pub mod auto_move;
pub mod deck;
pub mod invariants;
pub mod rules;
