//! Per-column summaries.

use serde::{Deserialize, Serialize};

use super::types::ColumnKind;

/// Statistics for a numeric column.
///
/// All four statistics are `None` when no value in the column parses as a
/// number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Number of values that parsed as numbers.
    pub valid_count: usize,
}

impl NumericSummary {
    /// The spread between minimum and maximum.
    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }
}

/// Counts for a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoricalSummary {
    /// Number of non-missing values.
    pub total_count: usize,
    /// Number of distinct string forms among them.
    pub unique_count: usize,
}

/// Summary of a single column, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    /// The kind of column this summary describes.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnSummary::Numeric(_) => ColumnKind::Numeric,
            ColumnSummary::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// The numeric statistics, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            ColumnSummary::Numeric(stats) => Some(stats),
            ColumnSummary::Categorical(_) => None,
        }
    }

    /// The categorical counts, if this is a categorical column.
    pub fn as_categorical(&self) -> Option<&CategoricalSummary> {
        match self {
            ColumnSummary::Categorical(counts) => Some(counts),
            ColumnSummary::Numeric(_) => None,
        }
    }
}
