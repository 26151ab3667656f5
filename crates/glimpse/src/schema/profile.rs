//! Dataset-level profile.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::ColumnSummary;
use super::types::ColumnKind;

/// Shape and statistics of a whole dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Number of rows, including rows with missing values.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Column names in first-seen order.
    pub column_names: Vec<String>,
    /// Numeric columns in first-seen order.
    pub numeric_columns: Vec<String>,
    /// Categorical columns in first-seen order.
    pub categorical_columns: Vec<String>,
    /// Summary per column, in column order.
    pub summaries: IndexMap<String, ColumnSummary>,
}

impl DatasetProfile {
    /// The profile of a dataset with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a column summary by name.
    pub fn summary(&self, name: &str) -> Option<&ColumnSummary> {
        self.summaries.get(name)
    }

    /// Get the kind of a column by name.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.summaries.get(name).map(ColumnSummary::kind)
    }

    /// Returns true when the dataset had no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
