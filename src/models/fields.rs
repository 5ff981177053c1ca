// src/models/fields.rs
// DOCUMENTATION: Coercion helpers shared by the map, marker and multimedia validators
// PURPOSE: Turn loosely-typed JSON values into checked Rust values

use crate::errors::AlbumError;
use serde_json::Value;

/// Truthy presence: null, false, "" and numeric zero all count as missing
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Presence for coordinates, where zero is a legal value
pub fn is_supplied(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub fn as_text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Finite number from a JSON number or a numeric string
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Integral number from a JSON number or a numeric string, sign not checked
pub fn as_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Length check counted in characters, both bounds inclusive
pub fn length_within(text: &str, min: Option<u64>, max: Option<u64>) -> bool {
    validator::validate_length(text, min, max, None)
}

/// Parse a path segment as a positive identifier
pub fn parse_id(raw: &str) -> Result<i64, AlbumError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| AlbumError::Validation("Invalid ID format. ID must be a number.".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_presence() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(null))));
        assert!(!is_present(Some(&json!(""))));
        assert!(!is_present(Some(&json!(0))));
        assert!(!is_present(Some(&json!(0.0))));
        assert!(!is_present(Some(&json!(false))));
        assert!(is_present(Some(&json!("0"))));
        assert!(is_present(Some(&json!(-1))));
        assert!(is_present(Some(&json!([]))));
    }

    #[test]
    fn test_zero_is_supplied() {
        assert!(is_supplied(Some(&json!(0))));
        assert!(is_supplied(Some(&json!(0.0))));
        assert!(!is_supplied(Some(&json!(null))));
        assert!(!is_supplied(Some(&json!(""))));
    }

    #[test]
    fn test_numbers_from_strings() {
        assert_eq!(as_number(Some(&json!("41.65"))), Some(41.65));
        assert_eq!(as_number(Some(&json!(-0.88))), Some(-0.88));
        assert_eq!(as_number(Some(&json!("north"))), None);
        assert_eq!(as_number(Some(&json!(true))), None);
        assert_eq!(as_number(Some(&json!("inf"))), None);
    }

    #[test]
    fn test_integers() {
        assert_eq!(as_integer(Some(&json!(7))), Some(7));
        assert_eq!(as_integer(Some(&json!("12"))), Some(12));
        assert_eq!(as_integer(Some(&json!(3.0))), Some(3));
        assert_eq!(as_integer(Some(&json!(3.5))), None);
        assert_eq!(as_integer(Some(&json!("3.5"))), None);
        assert_eq!(as_integer(Some(&json!(-4))), Some(-4));
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(length_within("Ñuñ", Some(3), Some(255)));
        assert!(!length_within("ab", Some(3), Some(255)));
        assert!(!length_within(&"x".repeat(256), Some(3), Some(255)));
        assert!(length_within("", None, Some(1000)));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert!(parse_id("abc").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("-5").is_err());
    }
}
