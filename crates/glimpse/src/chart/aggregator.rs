//! Bar, pie and line aggregation.

use log::debug;

use super::grouping::Groups;
use super::views::{BarPoint, BarSeries, ChartSet, LinePoint, LineSeries, PieSlice, PieSlices};
use crate::inference::Classification;
use crate::input::{FieldValue, RowSet};

/// Limits and labels used when building chart views.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Maximum number of bars.
    pub bar_limit: usize,
    /// Maximum number of pie slices.
    pub pie_limit: usize,
    /// Maximum number of line points.
    pub line_limit: usize,
    /// Group label used for missing categorical values.
    pub missing_label: String,
    /// Prefix for per-row bar labels.
    pub row_label_prefix: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_limit: 10,
            pie_limit: 5,
            line_limit: 20,
            missing_label: "Unknown".to_string(),
            row_label_prefix: "Row ".to_string(),
        }
    }
}

/// Derives chart views from a row set and its classification.
///
/// Every view is empty when its preconditions are not met.
#[derive(Debug, Clone, Default)]
pub struct ChartAggregator {
    config: ChartConfig,
}

impl ChartAggregator {
    /// Create an aggregator with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with custom limits.
    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Build all three views.
    pub fn build_all(&self, rows: &RowSet, classification: &Classification) -> ChartSet {
        ChartSet {
            bar: self.build_bar(rows, classification),
            pie: self.build_pie(rows, classification),
            line: self.build_line(rows, classification),
        }
    }

    /// Distribution view over the first numeric column.
    ///
    /// With a categorical column present, the numeric column is averaged per
    /// category of the first categorical column, in first-seen order.
    /// Otherwise the leading rows are plotted one bar each.
    pub fn build_bar(&self, rows: &RowSet, classification: &Classification) -> BarSeries {
        let Some(num_col) = first_index(rows, classification.numeric_columns()) else {
            return BarSeries::new();
        };

        match first_index(rows, classification.categorical_columns()) {
            None => rows
                .rows()
                .take(self.config.bar_limit)
                .enumerate()
                .map(|(i, row)| BarPoint {
                    label: format!("{}{}", self.config.row_label_prefix, i + 1),
                    value: number_at(row, num_col),
                })
                .collect(),
            Some(cat_col) => {
                let mut groups = Groups::new();
                for row in rows.rows() {
                    groups.add(self.label_at(row, cat_col), number_at(row, num_col));
                }
                groups
                    .into_ordered()
                    .take(self.config.bar_limit)
                    .map(|(label, totals)| BarPoint {
                        label,
                        value: totals.mean(),
                    })
                    .collect()
            }
        }
    }

    /// Category-share view: the most frequent values of the first
    /// categorical column, largest first.
    pub fn build_pie(&self, rows: &RowSet, classification: &Classification) -> PieSlices {
        let Some(cat_col) = first_index(rows, classification.categorical_columns()) else {
            return PieSlices::new();
        };

        let mut groups = Groups::new();
        for row in rows.rows() {
            groups.tally(self.label_at(row, cat_col));
        }

        groups
            .into_by_count()
            .into_iter()
            .take(self.config.pie_limit)
            .map(|(label, totals)| PieSlice {
                label,
                count: totals.count,
            })
            .collect()
    }

    /// Paired-trend view of the first two numeric columns over the leading rows.
    pub fn build_line(&self, rows: &RowSet, classification: &Classification) -> LineSeries {
        let mut numeric = classification
            .numeric_columns()
            .filter_map(|name| rows.column_index(name));
        let (Some(col_a), Some(col_b)) = (numeric.next(), numeric.next()) else {
            debug!("line view skipped: fewer than two numeric columns");
            return LineSeries::new();
        };

        rows.rows()
            .take(self.config.line_limit)
            .enumerate()
            .map(|(i, row)| LinePoint {
                index: i + 1,
                series_a: number_at(row, col_a),
                series_b: number_at(row, col_b),
            })
            .collect()
    }

    fn label_at(&self, row: &[FieldValue], col: usize) -> String {
        row.get(col)
            .and_then(FieldValue::label)
            .unwrap_or_else(|| self.config.missing_label.clone())
    }
}

/// Position of the first named column present in the row set.
fn first_index<'a>(rows: &RowSet, mut names: impl Iterator<Item = &'a str>) -> Option<usize> {
    names.find_map(|name| rows.column_index(name))
}

fn number_at(row: &[FieldValue], col: usize) -> f64 {
    row.get(col).map(FieldValue::number_or_zero).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::TypeInferencer;

    fn table(columns: &[&str], rows: Vec<Vec<FieldValue>>) -> RowSet {
        RowSet::new(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    fn charts(rows: &RowSet) -> ChartSet {
        let classification = TypeInferencer::new().classify(rows);
        ChartAggregator::new().build_all(rows, &classification)
    }

    #[test]
    fn test_bar_per_row_without_categories() {
        let rows = table(
            &["score"],
            (1..=12).map(|i| vec![FieldValue::from(i as f64)]).collect(),
        );
        let bar = charts(&rows).bar;

        assert_eq!(bar.len(), 10);
        assert_eq!(bar[0], BarPoint { label: "Row 1".to_string(), value: 1.0 });
        assert_eq!(bar[9].label, "Row 10");
    }

    #[test]
    fn test_bar_unparsable_values_read_as_zero() {
        let rows = table(
            &["score"],
            vec![
                vec!["4".into()],
                vec!["oops".into()],
                vec!["6".into()],
                vec![FieldValue::Missing],
            ],
        );
        let values: Vec<f64> = charts(&rows).bar.iter().map(|b| b.value).collect();

        assert_eq!(values, [4.0, 0.0, 6.0, 0.0]);
    }

    #[test]
    fn test_bar_group_means_in_first_seen_order() {
        let rows = table(
            &["team", "points"],
            vec![
                vec!["red".into(), 10.0.into()],
                vec!["blue".into(), 4.0.into()],
                vec![FieldValue::Missing, 7.0.into()],
                vec!["red".into(), "bad".into()],
                vec!["blue".into(), 8.0.into()],
            ],
        );
        let bar = charts(&rows).bar;

        assert_eq!(
            bar,
            vec![
                BarPoint { label: "red".to_string(), value: 5.0 },
                BarPoint { label: "blue".to_string(), value: 6.0 },
                BarPoint { label: "Unknown".to_string(), value: 7.0 },
            ]
        );
    }

    #[test]
    fn test_bar_caps_groups_at_ten() {
        let rows = table(
            &["group", "value"],
            (0..15)
                .flat_map(|g| {
                    let size = if g == 14 { 50 } else { 1 };
                    (0..size).map(move |_| {
                        vec![FieldValue::from(format!("g{}", g)), FieldValue::from(1.0)]
                    })
                })
                .collect(),
        );
        let labels: Vec<String> = charts(&rows).bar.into_iter().map(|b| b.label).collect();

        let expected: Vec<String> = (0..10).map(|g| format!("g{}", g)).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_pie_top_five_with_stable_ties() {
        let counts = [("A", 10), ("B", 7), ("C", 7), ("D", 3), ("E", 2), ("F", 1)];
        let mut column = Vec::new();
        // Interleave so that B is seen before C.
        for round in 0..10 {
            for (label, count) in counts {
                if round < count {
                    column.push(vec![FieldValue::from(label)]);
                }
            }
        }
        let rows = table(&["letter"], column);
        let pie = charts(&rows).pie;

        let labels: Vec<&str> = pie.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D", "E"]);
        assert_eq!(pie[1].count, 7);
        assert_eq!(pie[2].count, 7);
    }

    #[test]
    fn test_pie_counts_missing_as_unknown() {
        let rows = table(
            &["city"],
            vec![
                vec![FieldValue::Missing],
                vec!["Lima".into()],
                vec![FieldValue::Missing],
            ],
        );
        let pie = charts(&rows).pie;

        assert_eq!(pie[0], PieSlice { label: "Unknown".to_string(), count: 2 });
        assert_eq!(pie[1], PieSlice { label: "Lima".to_string(), count: 1 });
    }

    #[test]
    fn test_pie_empty_without_categorical_column() {
        let rows = table(&["x"], vec![vec![1.0.into()]]);
        assert!(charts(&rows).pie.is_empty());
    }

    #[test]
    fn test_bar_empty_without_numeric_column() {
        let rows = table(
            &["colour", "size"],
            vec![
                vec!["red".into(), "small".into()],
                vec!["blue".into(), "large".into()],
                vec!["red".into(), FieldValue::Missing],
            ],
        );
        let views = charts(&rows);

        assert!(views.bar.is_empty());
        assert!(views.line.is_empty());
        assert_eq!(
            views.pie,
            vec![
                PieSlice { label: "red".to_string(), count: 2 },
                PieSlice { label: "blue".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_bar_group_mean_of_huge_values_is_finite() {
        let rows = table(
            &["k", "v"],
            vec![
                vec!["a".into(), f64::MAX.into()],
                vec!["a".into(), f64::MAX.into()],
            ],
        );
        let bar = charts(&rows).bar;

        assert_eq!(bar.len(), 1);
        assert!(bar[0].value.is_finite());
        assert_eq!(bar[0].value, f64::MAX);
    }

    #[test]
    fn test_line_uses_first_two_numeric_columns() {
        let rows = table(
            &["label", "a", "b", "c"],
            (0..25)
                .map(|i| {
                    vec![
                        FieldValue::from("x"),
                        FieldValue::from(i as f64),
                        FieldValue::from(i as f64 * 2.0),
                        FieldValue::from(1000.0),
                    ]
                })
                .collect(),
        );
        let line = charts(&rows).line;

        assert_eq!(line.len(), 20);
        assert_eq!(line[0], LinePoint { index: 1, series_a: 0.0, series_b: 0.0 });
        assert_eq!(line[19], LinePoint { index: 20, series_a: 19.0, series_b: 38.0 });
    }

    #[test]
    fn test_line_needs_two_numeric_columns() {
        let rows = table(&["a", "b"], vec![vec![1.0.into(), "x".into()]]);
        assert!(charts(&rows).line.is_empty());
    }

    #[test]
    fn test_all_views_empty_without_rows() {
        assert!(charts(&RowSet::empty()).is_empty());
    }

    #[test]
    fn test_zero_limits_yield_empty_views() {
        let rows = table(&["k", "v", "w"], vec![vec!["a".into(), 1.0.into(), 2.0.into()]]);
        let classification = TypeInferencer::new().classify(&rows);
        let aggregator = ChartAggregator::with_config(ChartConfig {
            bar_limit: 0,
            pie_limit: 0,
            line_limit: 0,
            ..Default::default()
        });

        assert!(aggregator.build_all(&rows, &classification).is_empty());
    }
}
