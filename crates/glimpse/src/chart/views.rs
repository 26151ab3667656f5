//! Chart-ready series.

use serde::{Deserialize, Serialize};

/// One bar: a label and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

/// One pie slice: a category and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// One point of the paired trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// One-based row index.
    pub index: usize,
    pub series_a: f64,
    pub series_b: f64,
}

pub type BarSeries = Vec<BarPoint>;
pub type PieSlices = Vec<PieSlice>;
pub type LineSeries = Vec<LinePoint>;

/// The three chart views derived from one dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSet {
    pub bar: BarSeries,
    pub pie: PieSlices,
    pub line: LineSeries,
}

impl ChartSet {
    /// Returns true when no view has any data.
    pub fn is_empty(&self) -> bool {
        self.bar.is_empty() && self.pie.is_empty() && self.line.is_empty()
    }
}
