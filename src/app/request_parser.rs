// src/app/request_parser.rs
//! JS から届く「置き場」の指定を StackType に変換するよ。
//!
//! 受け付ける形:
//! - serde の形そのまま: `"Stock"`, `"Waste"`, `{"Tableau":3}`, `{"Foundation":0}`
//! - DOM の id っぽい短い形: `"stock"`, `"waste"`, `"tableau-3"`, `"foundation-0"`
//!   (StackType の Display と同じ書き方)

use log::warn;

use crate::components::stack::StackType;

/// 置き場の指定文字列をパースする。存在しない列番号もエラーにするよ。
pub fn parse_stack_type(input: &str) -> Result<StackType, String> {
    let trimmed = input.trim();
    let parsed = if trimmed.starts_with('"') || trimmed.starts_with('{') {
        serde_json::from_str::<StackType>(trimmed).map_err(|e| e.to_string())
    } else {
        parse_short_form(trimmed)
    };

    match parsed {
        Ok(stack_type) if stack_type.is_valid() => Ok(stack_type),
        Ok(stack_type) => Err(format!("no such stack: {}", stack_type)),
        Err(e) => {
            warn!("[Request] Could not parse stack '{}': {}", input, e);
            Err(format!("invalid stack '{}': {}", input, e))
        }
    }
}

fn parse_short_form(input: &str) -> Result<StackType, String> {
    let index = |text: &str| text.parse::<u8>().map_err(|e| e.to_string());
    match input.split_once('-') {
        None if input.eq_ignore_ascii_case("stock") => Ok(StackType::Stock),
        None if input.eq_ignore_ascii_case("waste") => Ok(StackType::Waste),
        Some(("tableau", i)) => index(i).map(StackType::Tableau),
        Some(("foundation", i)) => index(i).map(StackType::Foundation),
        _ => Err("unknown stack name".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_form() {
        assert_eq!(parse_stack_type(r#""Stock""#), Ok(StackType::Stock));
        assert_eq!(parse_stack_type(r#"{"Tableau":6}"#), Ok(StackType::Tableau(6)));
        assert_eq!(parse_stack_type(r#" {"Foundation": 3} "#), Ok(StackType::Foundation(3)));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_stack_type("waste"), Ok(StackType::Waste));
        assert_eq!(parse_stack_type("tableau-0"), Ok(StackType::Tableau(0)));
        assert_eq!(parse_stack_type("foundation-2"), Ok(StackType::Foundation(2)));
        // Display と行って帰ってこられる
        for stack_type in StackType::all() {
            assert_eq!(parse_stack_type(&stack_type.to_string()), Ok(stack_type));
        }
    }

    #[test]
    fn rejects_unknown_stacks() {
        assert!(parse_stack_type("tableau-7").is_err());
        assert!(parse_stack_type(r#"{"Foundation":4}"#).is_err());
        assert!(parse_stack_type("discard").is_err());
        assert!(parse_stack_type("tableau-x").is_err());
        assert!(parse_stack_type("{not json").is_err());
    }
}
