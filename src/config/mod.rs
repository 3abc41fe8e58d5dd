// src/config/mod.rs
//! ゲームの設定値をまとめるモジュールだよ！⚙️
//! ルールの定数 (`rules`) と、ホストから渡される実行時の設定 (`settings`) の2つ。

pub mod rules;
pub mod settings;

pub use settings::GameSettings;
