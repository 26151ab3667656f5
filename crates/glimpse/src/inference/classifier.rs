//! Numeric vs. categorical column classification.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::{FieldValue, RowSet};
use crate::schema::ColumnKind;

/// Column kinds in first-seen column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification {
    kinds: IndexMap<String, ColumnKind>,
}

impl Classification {
    /// Get the kind assigned to a column.
    pub fn kind(&self, name: &str) -> Option<ColumnKind> {
        self.kinds.get(name).copied()
    }

    /// Iterate over `(name, kind)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Names of the numeric columns in column order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.columns_of(ColumnKind::Numeric)
    }

    /// Names of the categorical columns in column order.
    pub fn categorical_columns(&self) -> impl Iterator<Item = &str> {
        self.columns_of(ColumnKind::Categorical)
    }

    /// Number of classified columns.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true when no column was classified.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn columns_of(&self, kind: ColumnKind) -> impl Iterator<Item = &str> {
        self.kinds
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, ColumnKind)> for Classification {
    fn from_iter<I: IntoIterator<Item = (String, ColumnKind)>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

/// Classifies columns by majority vote over their non-missing values.
#[derive(Debug, Clone, Default)]
pub struct TypeInferencer;

impl TypeInferencer {
    /// Create a new type inferencer.
    pub fn new() -> Self {
        Self
    }

    /// Classify every column of the row set.
    pub fn classify(&self, rows: &RowSet) -> Classification {
        rows.column_names()
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), self.classify_values(rows.column_values(idx))))
            .collect()
    }

    /// Classify one column from its values.
    ///
    /// A column is numeric when strictly more than half of its non-missing
    /// values parse as numbers. A column with no values is categorical.
    pub fn classify_values<'a>(
        &self,
        values: impl IntoIterator<Item = &'a FieldValue>,
    ) -> ColumnKind {
        let (present, numeric) = values
            .into_iter()
            .filter(|v| !v.is_missing())
            .fold((0usize, 0usize), |(present, numeric), v| {
                (present + 1, numeric + usize::from(v.as_number().is_some()))
            });

        if present > 0 && numeric * 2 > present {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }
}
