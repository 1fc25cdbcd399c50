//! Lenient numeric parsing of loosely typed JSON fields.
//!
//! The remote service sends vital signs as numbers, numeric strings, or something else
//! entirely. Every scorer goes through the two functions in this module so that all fields
//! share one set of edge-case rules:
//!
//! - Strings: leading whitespace is skipped, then an optional sign, then the longest valid
//!   numeric prefix. Anything after that prefix is ignored (`"98.6F"` is `98.6`). A string
//!   with no numeric prefix is not a number. `"inf"` and `"NaN"` are not numbers.
//! - JSON numbers are used directly. [`parse_int`] truncates fractional numbers toward zero.
//! - Booleans, null, arrays and objects are not numbers.
//!
//! Integers too large for `i64` saturate at the bounds, which keeps them on the correct
//! side of every threshold.

use serde_json::Value;

/// Parses `value` as a base-10 integer.
///
/// Returns `None` when the value has no usable integer reading.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::String(text) => parse_int_prefix(text),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
        _ => None,
    }
}

/// Parses `value` as a floating-point number.
///
/// Returns `None` when the value has no usable numeric reading.
pub fn parse_float(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => parse_float_prefix(text),
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

/// Parses the leading integer of `text`, ignoring trailing characters.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = split_sign(text);

    let len = digit_run(rest);
    if len == 0 {
        return None;
    }

    let magnitude = rest.as_bytes()[..len].iter().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the leading decimal number of `text`, ignoring trailing characters.
///
/// Accepts `12`, `12.5`, `.5`, `12.` and an optional exponent (`1.2e2`). An exponent marker
/// with no digits after it is treated as trailing garbage, so `"98e"` is `98`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digit_run(&text[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&text[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&text[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_prefix_ignores_trailing_garbage() {
        assert_eq!(parse_int_prefix("120abc"), Some(120));
        assert_eq!(parse_int_prefix("  45 years"), Some(45));
        assert_eq!(parse_int_prefix("72.9"), Some(72));
    }

    #[test]
    fn int_prefix_handles_signs() {
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("+-5"), None);
    }

    #[test]
    fn int_prefix_rejects_non_numeric_lead() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("unknown"), None);
        assert_eq!(parse_int_prefix("N/A"), None);
        assert_eq!(parse_int_prefix("abc120"), None);
    }

    #[test]
    fn int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn float_prefix_accepts_common_shapes() {
        assert_eq!(parse_float_prefix("98.6"), Some(98.6));
        assert_eq!(parse_float_prefix("98.6F"), Some(98.6));
        assert_eq!(parse_float_prefix(" 101"), Some(101.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("12."), Some(12.0));
        assert_eq!(parse_float_prefix("-3.25"), Some(-3.25));
        assert_eq!(parse_float_prefix("1.2e2"), Some(120.0));
        assert_eq!(parse_float_prefix("1E-1x"), Some(0.1));
    }

    #[test]
    fn float_prefix_treats_dangling_exponent_as_garbage() {
        assert_eq!(parse_float_prefix("98e"), Some(98.0));
        assert_eq!(parse_float_prefix("98e+"), Some(98.0));
        assert_eq!(parse_float_prefix("98.5.1"), Some(98.5));
    }

    #[test]
    fn float_prefix_rejects_non_numbers() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("TEMP_ERROR"), None);
        assert_eq!(parse_float_prefix("inf"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("e5"), None);
    }

    #[test]
    fn int_from_json_values() {
        assert_eq!(parse_int(&json!(70)), Some(70));
        assert_eq!(parse_int(&json!("70")), Some(70));
        assert_eq!(parse_int(&json!(64.9)), Some(64));
        assert_eq!(parse_int(&json!(-0.5)), Some(0));
        assert_eq!(parse_int(&json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(parse_int(&Value::Null), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!([70])), None);
        assert_eq!(parse_int(&json!({ "years": 70 })), None);
    }

    #[test]
    fn float_from_json_values() {
        assert_eq!(parse_float(&json!(99.6)), Some(99.6));
        assert_eq!(parse_float(&json!(102)), Some(102.0));
        assert_eq!(parse_float(&json!("101.5")), Some(101.5));
        assert_eq!(parse_float(&Value::Null), None);
        assert_eq!(parse_float(&json!(false)), None);
        assert_eq!(parse_float(&json!([])), None);
    }
}
