//! Field value type

use std::fmt;

/// Largest integer an `f64` represents exactly (2^53)
#[cfg(feature = "serde")]
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single field of a row.
///
/// The parser only ever produces [`FieldValue::Text`], unless dynamic typing
/// is enabled, in which case unambiguous numbers and booleans are coerced.
/// Empty text is never coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw field text
    Text(String),

    /// Numeric value (coerced, or supplied to the serializer)
    Number(f64),

    /// Boolean value (coerced, or supplied to the serializer)
    Boolean(bool),

    /// Absent value. Never produced by the parser; serializes as an empty field.
    Null,
}

impl FieldValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        FieldValue::Text(s.into())
    }

    /// Empty text, the value bound to record keys with no corresponding field
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Check if the value is null or empty text
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::empty()
    }
}

/// Textual representation used when serializing a field.
///
/// Numbers print without a trailing `.0`, in exponent form (`1e+21`,
/// `1e-7`) outside `1e-6 <= |n| < 1e21`, and non-finite numbers as
/// `NaN`/`Infinity`/`-Infinity`. Booleans print in lowercase, null as nothing.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            FieldValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            FieldValue::Number(n) if *n == 0.0 => f.write_str("0"),
            FieldValue::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
                let text = format!("{:e}", n);
                match text.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exp)
                    }
                    _ => f.write_str(&text),
                }
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::text(s)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_unit(),
        }
    }
}
