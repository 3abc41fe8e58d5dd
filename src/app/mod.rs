// src/app/mod.rs
//! JS ホストとつなぐ部分 (SolitaireApp) を役割ごとに分割して置くモジュールだよ！

pub mod game_app;
pub mod logger;
pub mod move_handler;
pub mod request_parser;
pub mod state_getter;
pub mod stock_handler;
