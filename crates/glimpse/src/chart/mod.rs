//! Chart-ready aggregations of a profiled dataset.

mod aggregator;
mod grouping;
mod views;

pub use aggregator::{ChartAggregator, ChartConfig};
pub use views::{BarPoint, BarSeries, ChartSet, LinePoint, LineSeries, PieSlice, PieSlices};
