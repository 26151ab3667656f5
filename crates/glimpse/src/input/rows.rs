//! The in-memory row set consumed by the profiling engine.

use indexmap::IndexMap;

use super::value::FieldValue;
use crate::error::{GlimpseError, Result};

/// A keyed record as produced by a decoder.
pub type Row = IndexMap<String, FieldValue>;

/// An ordered set of rows sharing one column set.
///
/// Column names come from the first row and keep their first-seen order.
/// Every row holds exactly one value per column, so the consistency check
/// happens once at construction and never again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    columns: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl RowSet {
    /// An empty row set with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a row set from column names and positional rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<FieldValue>>) -> Result<Self> {
        for (idx, name) in columns.iter().enumerate() {
            if columns[..idx].contains(name) {
                return Err(GlimpseError::MalformedInput {
                    row: 0,
                    message: format!("duplicate column name '{}'", name),
                });
            }
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(GlimpseError::MalformedInput {
                    row: row_idx,
                    message: format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        row.len()
                    ),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Build a row set from keyed records.
    ///
    /// The first record fixes the column set. Any later record with a
    /// different key set is a [`GlimpseError::MalformedInput`].
    pub fn from_records(records: Vec<Row>) -> Result<Self> {
        let mut records = records.into_iter();
        let Some(first) = records.next() else {
            return Ok(Self::empty());
        };

        let columns: Vec<String> = first.keys().cloned().collect();
        let mut rows = vec![first.into_values().collect::<Vec<_>>()];

        for (offset, mut record) in records.enumerate() {
            let row_idx = offset + 1;
            if record.len() != columns.len() {
                return Err(GlimpseError::MalformedInput {
                    row: row_idx,
                    message: format!(
                        "expected {} columns, found {}",
                        columns.len(),
                        record.len()
                    ),
                });
            }

            let mut values = Vec::with_capacity(columns.len());
            for name in &columns {
                match record.swap_remove(name) {
                    Some(value) => values.push(value),
                    None => {
                        return Err(GlimpseError::MalformedInput {
                            row: row_idx,
                            message: format!("missing column '{}'", name),
                        });
                    }
                }
            }
            rows.push(values);
        }

        Ok(Self { columns, rows })
    }

    /// Column names in first-seen order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &FieldValue> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&FieldValue::Missing))
    }

    /// Rows in arrival order.
    pub fn rows(&self) -> impl Iterator<Item = &[FieldValue]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&FieldValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}
