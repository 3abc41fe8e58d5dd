// src/config/settings.rs
//! ホスト (JS 側) から JSON で渡される実行時設定だよ。
//! 例: `{"seed": 12345, "logLevel": "debug"}`
//! 書かれていない項目はデフォルト値になる！

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// 実行時設定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    /// 最初のゲームのシード値。`None` ならランダムに決める。
    pub seed: Option<u64>,
    /// ログの最大レベル ("off", "error", "warn", "info", "debug", "trace")。
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameSettings {
    /// JSON 文字列から設定を読み込む。空文字なら全部デフォルト。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// `log_level` を `LevelFilter` に変換する。読めない値なら `Info` にしておく。
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
