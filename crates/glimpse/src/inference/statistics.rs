//! Descriptive statistics per column.

use std::cmp::Ordering;
use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::classifier::Classification;
use crate::input::{FieldValue, RowSet};
use crate::schema::{CategoricalSummary, ColumnKind, ColumnSummary, NumericSummary};

/// How the median of an even-length column is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianStrategy {
    /// The element at index `len / 2` of the sorted values (upper middle).
    #[default]
    Naive,
    /// The mean of the two middle elements for even lengths.
    Interpolated,
}

/// Computes numeric and categorical summaries.
#[derive(Debug, Clone, Default)]
pub struct StatisticsComputer {
    median: MedianStrategy,
}

impl StatisticsComputer {
    /// Create a statistics computer using the naive median.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a statistics computer with a specific median strategy.
    pub fn with_median(median: MedianStrategy) -> Self {
        Self { median }
    }

    /// Summarize every classified column of the row set, in column order.
    ///
    /// Columns named in the classification but absent from the row set are
    /// summarized as empty.
    pub fn summarize(
        &self,
        rows: &RowSet,
        classification: &Classification,
    ) -> IndexMap<String, ColumnSummary> {
        classification
            .iter()
            .map(|(name, kind)| {
                let summary = match rows.column_index(name) {
                    Some(idx) => self.summarize_values(kind, rows.column_values(idx)),
                    None => self.summarize_values(kind, std::iter::empty()),
                };
                (name.to_string(), summary)
            })
            .collect()
    }

    /// Summarize one column of the given kind.
    pub fn summarize_values<'a>(
        &self,
        kind: ColumnKind,
        values: impl IntoIterator<Item = &'a FieldValue>,
    ) -> ColumnSummary {
        let present = values.into_iter().filter(|v| !v.is_missing());
        match kind {
            ColumnKind::Numeric => {
                ColumnSummary::Numeric(self.numeric_summary(present.filter_map(FieldValue::as_number)))
            }
            ColumnKind::Categorical => ColumnSummary::Categorical(categorical_summary(present)),
        }
    }

    fn numeric_summary(&self, numbers: impl Iterator<Item = f64>) -> NumericSummary {
        let mut sorted: Vec<f64> = numbers.collect();
        if sorted.is_empty() {
            return NumericSummary::default();
        }
        // Values are finite, so the comparison is total.
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = sorted.len();

        NumericSummary {
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            mean: Some(mean_of(&sorted)),
            median: Some(self.median_of(&sorted)),
            valid_count: count,
        }
    }

    /// Median of a non-empty, ascending slice.
    fn median_of(&self, sorted: &[f64]) -> f64 {
        let mid = sorted.len() / 2;
        match self.median {
            MedianStrategy::Naive => sorted[mid],
            MedianStrategy::Interpolated if sorted.len() % 2 == 0 => {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            }
            MedianStrategy::Interpolated => sorted[mid],
        }
    }
}

/// Arithmetic mean of a non-empty slice of finite values.
///
/// Sums directly and falls back to a running mean when the sum overflows, so
/// the result is finite whenever the inputs are.
fn mean_of(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / values.len() as f64;
    }
    values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, &value)| running_mean(mean, value, i + 1))
}

/// Fold `value` into the mean of the previous `count - 1` values.
///
/// Every term is scaled by `1 / count` before adding, which keeps the result
/// within the range of the inputs.
pub(crate) fn running_mean(mean: f64, value: f64, count: usize) -> f64 {
    let k = count as f64;
    mean - mean / k + value / k
}

fn categorical_summary<'a>(values: impl Iterator<Item = &'a FieldValue>) -> CategoricalSummary {
    let mut distinct: HashSet<String> = HashSet::new();
    let mut total_count = 0;
    for value in values {
        total_count += 1;
        distinct.insert(value.to_string());
    }
    CategoricalSummary {
        total_count,
        unique_count: distinct.len(),
    }
}
