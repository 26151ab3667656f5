//! Glimpse: dataset profiling and chart aggregation for tabular data.
//!
//! Glimpse takes decoded rows with no declared schema and produces a
//! deterministic summary: which columns are numeric and which categorical,
//! descriptive statistics per column, and three small chart-ready views.
//!
//! # Core Principles
//!
//! - **Inferred, never rejected**: every column gets a kind, ambiguous or not
//! - **Defined degenerate output**: empty input and unparsable values never error
//! - **Deterministic**: the same rows always produce the same report
//!
//! # Example
//!
//! ```no_run
//! use glimpse::Profiler;
//!
//! let profiler = Profiler::new();
//! let result = profiler.profile_file("measurements.csv").unwrap();
//!
//! println!("Columns: {}", result.report.profile.column_count);
//! println!("Numeric: {:?}", result.report.profile.numeric_columns);
//! ```

pub mod chart;
pub mod error;
pub mod inference;
pub mod input;
pub mod schema;

mod profiler;

pub use crate::profiler::{profile, FileReport, ProfileReport, Profiler, ProfilerConfig};
pub use chart::{BarPoint, ChartAggregator, ChartConfig, ChartSet, LinePoint, PieSlice};
pub use error::{GlimpseError, Result};
pub use inference::{Classification, MedianStrategy, StatisticsComputer, TypeInferencer};
pub use input::{FieldValue, Parser, ParserConfig, Row, RowSet, SourceMetadata};
pub use schema::{CategoricalSummary, ColumnKind, ColumnSummary, DatasetProfile, NumericSummary};
