//! Numeric checks for loosely typed sheet cells.

use serde_json::Value;

/// Returns `true` if `value` converts to a finite number.
///
/// Null, booleans, arrays, objects and blank strings are never numeric.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(number) => number.as_f64().is_some_and(f64::is_finite),
        Value::String(text) => parse_number(text).is_some(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parses a cell as a finite number, ignoring surrounding whitespace.
///
/// Only decimal and exponent forms are numbers here. Hex, octal and binary
/// literals such as `0x10` are rejected, as are `Infinity` and `NaN`.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_is_numeric_accepts_numbers_and_numeric_strings() {
        assert!(is_numeric(&json!(123)));
        assert!(is_numeric(&json!(-123)));
        assert!(is_numeric(&json!(0)));
        assert!(is_numeric(&json!(123.45)));
        assert!(is_numeric(&json!("123")));
    }

    #[test]
    fn test_is_numeric_rejects_non_numbers() {
        assert!(!is_numeric(&json!(f64::NAN)));
        assert!(!is_numeric(&Value::Null));
        assert!(!is_numeric(&json!({})));
        assert!(!is_numeric(&json!([])));
        assert!(!is_numeric(&json!("123b")));
        assert!(!is_numeric(&json!("")));
        assert!(!is_numeric(&json!("   ")));
        assert!(!is_numeric(&json!(true)));
    }

    #[test]
    fn test_parse_number_rejects_non_finite_spellings() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-Infinity"), None);
    }

    #[test]
    fn test_parse_number_rejects_radix_literals() {
        assert_eq!(parse_number("0x10"), None);
        assert_eq!(parse_number("0b101"), None);
        assert_eq!(parse_number("0o17"), None);
        assert!(!is_numeric(&json!("0x10")));
    }

    #[test]
    fn test_parse_number_trims_whitespace() {
        assert_eq!(parse_number(" 42.5 "), Some(42.5));
        assert_eq!(parse_number("-7"), Some(-7.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
    }
}
