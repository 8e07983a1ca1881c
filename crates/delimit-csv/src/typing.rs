//! Dynamic typing of field text
//!
//! A field is coerced only when unambiguous. The numeric grammar is strict:
//! optional sign, digits with an optional fraction (or a bare fraction), and
//! an optional exponent. No surrounding whitespace, hex, `Infinity`, `NaN`
//! or digit separators. Numbers win over booleans; booleans are
//! case-insensitive `true`/`false`.

use delimit_core::FieldValue;
use lazy_regex::regex_is_match;

/// Check whether `text` is a number under the strict grammar
pub fn is_numeric(text: &str) -> bool {
    regex_is_match!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$", text)
}

/// Coerce field text to a number or boolean when unambiguous.
///
/// Empty text stays empty text.
pub fn coerce(text: String) -> FieldValue {
    if text.is_empty() {
        return FieldValue::Text(text);
    }
    if is_numeric(&text) {
        if let Ok(n) = text.parse::<f64>() {
            return FieldValue::Number(n);
        }
    }
    if text.eq_ignore_ascii_case("true") {
        return FieldValue::Boolean(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return FieldValue::Boolean(false);
    }
    FieldValue::Text(text)
}
