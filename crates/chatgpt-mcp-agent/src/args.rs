use chatgpt_automation::{DEFAULT_WAIT, MAX_WAIT};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Validated arguments of the `chatgpt` tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatGptArgs {
    Ask {
        prompt: String,
        conversation_id: Option<String>,
        time_to_wait: Duration,
    },
    GetConversations,
}

impl ChatGptArgs {
    pub fn operation(&self) -> &'static str {
        match self {
            ChatGptArgs::Ask { .. } => "ask",
            ChatGptArgs::GetConversations => "get_conversations",
        }
    }
}

/// Every constraint the arguments violated, in rule order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid arguments for ChatGPT tool: {}", .violations.join("; "))]
pub struct ArgsError {
    pub violations: Vec<String>,
}

/// Parse untyped tool arguments.
///
/// Rules, in order:
/// 1. the input is an object;
/// 2. `operation` is "ask" or "get_conversations";
/// 3. `prompt` is present and non-empty for "ask";
/// 4. `prompt` and `conversation_id`, when truthy, are strings;
/// 5. `time_to_wait`, when present, coerces to a number in [0, 3600].
///
/// Falsy values (`""`, `0`, `false`, `null`) for `prompt` and
/// `conversation_id` count as absent.
pub fn parse_args(input: &Value) -> Result<ChatGptArgs, ArgsError> {
    let Some(map) = input.as_object() else {
        return Err(ArgsError {
            violations: vec!["arguments must be an object".to_string()],
        });
    };

    let mut violations = Vec::new();

    let is_ask = match map.get("operation").and_then(Value::as_str) {
        Some("ask") => Some(true),
        Some("get_conversations") => Some(false),
        _ => {
            violations
                .push("operation must be one of \"ask\", \"get_conversations\"".to_string());
            None
        }
    };

    let prompt = map.get("prompt").filter(|v| is_truthy(v));
    if is_ask == Some(true) && prompt.is_none() {
        violations.push("prompt is required for the ask operation".to_string());
    }
    if prompt.is_some_and(|p| !p.is_string()) {
        violations.push("prompt must be a string".to_string());
    }

    let conversation_id = map.get("conversation_id").filter(|v| is_truthy(v));
    if conversation_id.is_some_and(|c| !c.is_string()) {
        violations.push("conversation_id must be a string".to_string());
    }

    let time_to_wait = match map.get("time_to_wait") {
        None => Some(DEFAULT_WAIT),
        Some(raw) => {
            let wait = coerce_number(raw);
            let max = MAX_WAIT.as_secs_f64();
            match Duration::try_from_secs_f64(wait) {
                Ok(duration) if wait <= max => Some(duration),
                _ => {
                    warn!(
                        "Invalid time_to_wait: {}. Must be a number between 0 and {}.",
                        raw, max
                    );
                    violations.push(format!(
                        "time_to_wait must be a number between 0 and {max}"
                    ));
                    None
                }
            }
        }
    };

    if !violations.is_empty() {
        return Err(ArgsError { violations });
    }

    match (is_ask, time_to_wait) {
        (Some(true), Some(time_to_wait)) => Ok(ChatGptArgs::Ask {
            prompt: prompt.and_then(Value::as_str).unwrap_or_default().to_string(),
            conversation_id: conversation_id.and_then(Value::as_str).map(str::to_string),
            time_to_wait,
        }),
        (Some(false), Some(_)) => Ok(ChatGptArgs::GetConversations),
        _ => Err(ArgsError {
            violations: vec!["arguments could not be interpreted".to_string()],
        }),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose numeric conversion: `null` is 0, booleans are 0/1, numeric text
/// parses after trimming (blank text is 0); everything else is NaN.
fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => text_to_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn text_to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64's parser also accepts "inf" and "nan" spellings
    if text.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_to_number() {
        assert_eq!(text_to_number("  12 "), 12.0);
        assert_eq!(text_to_number(""), 0.0);
        assert_eq!(text_to_number("1.5"), 1.5);
        assert_eq!(text_to_number("1e3"), 1000.0);
        assert_eq!(text_to_number("0x10"), 16.0);
        assert_eq!(text_to_number("Infinity"), f64::INFINITY);
        assert!(text_to_number("abc").is_nan());
        assert!(text_to_number("inf").is_nan());
        assert!(text_to_number("NaN").is_nan());
        assert!(text_to_number("12px").is_nan());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
        assert_eq!(coerce_number(&json!(42)), 42.0);
        assert_eq!(coerce_number(&json!("7")), 7.0);
        assert!(coerce_number(&json!([1])).is_nan());
        assert!(coerce_number(&json!({})).is_nan());
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
    }
}
