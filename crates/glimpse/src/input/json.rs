//! JSON row decoding.

use serde_json::Value;

use super::rows::{Row, RowSet};
use super::value::FieldValue;
use crate::error::{GlimpseError, Result};

/// Decode a JSON array of row objects.
///
/// Key order inside each object is preserved, so the first object defines
/// the column order. Nested arrays and objects are kept as their compact JSON
/// text.
pub fn decode_json_rows(bytes: &[u8], max_rows: Option<usize>) -> Result<RowSet> {
    let document: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = document else {
        return Err(GlimpseError::UnsupportedFormat(
            "expected a JSON array of row objects".to_string(),
        ));
    };

    let limit = max_rows.unwrap_or(usize::MAX);
    if items.len() > limit {
        log::warn!(
            "row ceiling of {} reached, {} rows ignored",
            limit,
            items.len() - limit
        );
    }

    let mut records = Vec::with_capacity(items.len().min(limit));
    for (row_idx, item) in items.into_iter().take(limit).enumerate() {
        records.push(record_from_json(row_idx, item)?);
    }

    RowSet::from_records(records)
}

fn record_from_json(row_idx: usize, item: Value) -> Result<Row> {
    match item {
        Value::Object(object) => Ok(object
            .into_iter()
            .map(|(key, value)| (key, field_from_json(value)))
            .collect()),
        other => Err(GlimpseError::MalformedInput {
            row: row_idx,
            message: format!("expected an object, found {}", json_kind(&other)),
        }),
    }
}

/// Map a JSON value onto a field value.
pub fn field_from_json(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Missing,
        Value::Bool(b) => FieldValue::Bool(b),
        Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Missing),
        Value::String(s) => FieldValue::from_text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Text(nested.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_rows() {
        let rows = decode_json_rows(
            br#"[{"b": 1, "a": "x"}, {"a": "", "b": null}]"#,
            None,
        )
        .unwrap();

        assert_eq!(rows.column_names(), ["b", "a"]);
        assert_eq!(rows.get(0, 0), Some(&FieldValue::Number(1.0)));
        assert_eq!(rows.get(1, 1), Some(&FieldValue::Missing));
        assert_eq!(rows.get(1, 0), Some(&FieldValue::Missing));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_json_rows(br#"{"a": 1}"#, None).unwrap_err();
        assert!(matches!(err, GlimpseError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_decode_rejects_non_object_row() {
        let err = decode_json_rows(br#"[{"a": 1}, 2]"#, None).unwrap_err();
        assert!(matches!(err, GlimpseError::MalformedInput { row: 1, .. }));
    }

    #[test]
    fn test_decode_respects_row_ceiling() {
        let rows = decode_json_rows(br#"[{"a": 1}, {"a": 2}, {"a": 3}]"#, Some(2)).unwrap();
        assert_eq!(rows.row_count(), 2);
    }

    #[test]
    fn test_nested_values_become_text() {
        let value = field_from_json(serde_json::json!([1, 2]));
        assert_eq!(value, FieldValue::Text("[1,2]".to_string()));
    }
}
