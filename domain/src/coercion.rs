//! Normalizes numeric fields that clients send as strings.
//!
//! Some clients send `role` and `expirationSeconds` as JSON strings.
//! Before validation those values are parsed as base-10 integers using the
//! leading-integer rule (`"12abc"` is 12, `"  7"` is 7). Text without a leading
//! integer is left as it is, so the validator's numeric check reports it as a
//! type error.

use serde_json::{Number, Value};

/// Fields whose textual values are parsed to integers.
pub const COERCED_FIELDS: [&str; 2] = ["role", "expirationSeconds"];

/// Returns `body` with every textual [`COERCED_FIELDS`] value parsed to an
/// integer where possible. Absent fields stay absent; other fields and
/// non-object bodies are returned unchanged.
pub fn coerce_request_body(mut body: Value) -> Value {
    if let Some(object) = body.as_object_mut() {
        for field in COERCED_FIELDS {
            if let Some(value) = object.get_mut(field) {
                if let Some(parsed) = value.as_str().and_then(parse_leading_integer) {
                    *value = parsed;
                }
            }
        }
    }
    body
}

/// Parses the optional sign and the run of ASCII digits at the start of `text`
/// (after leading whitespace). Returns `None` when there are no digits.
fn parse_leading_integer(text: &str) -> Option<Value> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    let digits = &unsigned[..digit_count];

    match digits.parse::<i64>() {
        Ok(magnitude) => Some(Value::from(if negative { -magnitude } else { magnitude })),
        // Too large for i64: fall back to the nearest float like any JSON number.
        Err(_) => {
            let magnitude = digits.parse::<f64>().ok()?;
            Number::from_f64(if negative { -magnitude } else { magnitude }).map(Value::Number)
        }
    }
}
