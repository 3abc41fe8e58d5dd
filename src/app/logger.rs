// src/app/logger.rs
//! `log` クレートのマクロ (info! とか) をブラウザのコンソールに出すロガーだよ！📝

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// `log::Log` を実装して、レベルに合わせた `console.*` に流す。
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message: JsValue = format!("[{}] {}", record.target(), record.args()).into();
        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug => console::debug_1(&message),
            Level::Trace => console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2回目以降はレベルだけ更新するよ。
pub fn init(level: LevelFilter) {
    // 登録済みならエラーが返るけど、それで問題なし
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
