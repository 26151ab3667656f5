//! Loosely-typed cell values.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single field of a decoded row.
///
/// Values are resolved once by the decoder. Absent, null and empty-string
/// inputs all collapse into [`FieldValue::Missing`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent, null or empty.
    Missing,
    /// A number produced by the decoder.
    Number(f64),
    /// A boolean produced by the decoder.
    Bool(bool),
    /// Text exactly as it arrived.
    Text(String),
}

impl FieldValue {
    /// Wrap raw text without any type coercion.
    pub fn from_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::Text(raw)
        }
    }

    /// Resolve raw text with dynamic typing: numeric-looking text becomes a
    /// number and `true`/`false` become booleans, in lowercase, capitalised
    /// or uppercase spelling. Everything else stays text.
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return FieldValue::Missing;
        }
        match raw {
            "true" | "TRUE" | "True" => return FieldValue::Bool(true),
            "false" | "FALSE" | "False" => return FieldValue::Bool(false),
            _ => {}
        }
        match parse_number(raw) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Text(raw.to_string()),
        }
    }

    /// Returns true for absent, null or empty values.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// The numeric reading of this value, if it has a finite one.
    ///
    /// This is the single numeric-parse predicate shared by type inference,
    /// statistics and chart aggregation.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Number(_) => None,
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(s) => parse_number(s),
        }
    }

    /// The numeric reading of this value, with anything unparsable read as zero.
    pub fn number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// The value's string form, or `None` when missing.
    pub fn label(&self) -> Option<String> {
        if self.is_missing() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

/// Parse text as a finite number, ignoring surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => Ok(()),
            // Negative zero renders as plain zero.
            FieldValue::Number(n) if *n == 0.0 => write!(f, "0"),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Missing => serializer.serialize_none(),
            FieldValue::Number(n) => serializer.serialize_f64(*n),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::from_text(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::from_text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}
