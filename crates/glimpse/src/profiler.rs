//! Main Profiler struct and public API.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::chart::{ChartAggregator, ChartConfig, ChartSet};
use crate::error::Result;
use crate::inference::{MedianStrategy, StatisticsComputer, TypeInferencer};
use crate::input::{Parser, ParserConfig, Row, RowSet, SourceMetadata};
use crate::schema::DatasetProfile;

/// Configuration for profiling.
#[derive(Debug, Clone, Default)]
pub struct ProfilerConfig {
    /// Decoder configuration, used by the file and byte entry points.
    pub parser: ParserConfig,
    /// Chart limits and labels.
    pub charts: ChartConfig,
    /// Median strategy for numeric columns.
    pub median: MedianStrategy,
}

/// Profile and chart views of one dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Shape and per-column statistics.
    pub profile: DatasetProfile,
    /// Bar, pie and line views.
    pub charts: ChartSet,
}

/// Result of profiling a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    #[serde(flatten)]
    pub report: ProfileReport,
}

/// The profiling engine.
///
/// Holds no per-run state: one instance can profile any number of datasets,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    config: ProfilerConfig,
    inferencer: TypeInferencer,
    statistics: StatisticsComputer,
    charts: ChartAggregator,
}

impl Profiler {
    /// Create a new Profiler with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProfilerConfig::default())
    }

    /// Create a Profiler with custom configuration.
    pub fn with_config(config: ProfilerConfig) -> Self {
        let statistics = StatisticsComputer::with_median(config.median);
        let charts = ChartAggregator::with_config(config.charts.clone());

        Self {
            config,
            inferencer: TypeInferencer::new(),
            statistics,
            charts,
        }
    }

    /// Replace the decoder configuration.
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.config.parser = parser;
        self
    }

    /// Replace the chart limits.
    pub fn with_charts(mut self, charts: ChartConfig) -> Self {
        self.charts = ChartAggregator::with_config(charts.clone());
        self.config.charts = charts;
        self
    }

    /// Choose the median strategy.
    pub fn with_median(mut self, median: MedianStrategy) -> Self {
        self.statistics = StatisticsComputer::with_median(median);
        self.config.median = median;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profile a row set.
    ///
    /// Never fails: a row set without rows yields an empty profile and empty
    /// chart views.
    pub fn profile(&self, rows: &RowSet) -> ProfileReport {
        if rows.is_empty() {
            debug!("profiling skipped: no rows");
            return ProfileReport::default();
        }

        let classification = self.inferencer.classify(rows);
        let summaries = self.statistics.summarize(rows, &classification);
        let charts = self.charts.build_all(rows, &classification);

        let profile = DatasetProfile {
            row_count: rows.row_count(),
            column_count: rows.column_count(),
            column_names: rows.column_names().to_vec(),
            numeric_columns: classification.numeric_columns().map(String::from).collect(),
            categorical_columns: classification
                .categorical_columns()
                .map(String::from)
                .collect(),
            summaries,
        };

        debug!(
            "profiled {} rows: {} numeric, {} categorical columns",
            profile.row_count,
            profile.numeric_columns.len(),
            profile.categorical_columns.len()
        );

        ProfileReport { profile, charts }
    }

    /// Profile keyed records, checking that they share one column set.
    pub fn profile_rows(&self, records: Vec<Row>) -> Result<ProfileReport> {
        let rows = RowSet::from_records(records)?;
        Ok(self.profile(&rows))
    }

    /// Decode and profile a CSV/TSV or JSON file.
    pub fn profile_file(&self, path: impl AsRef<Path>) -> Result<FileReport> {
        let parser = Parser::with_config(self.config.parser.clone());
        let (rows, source) = parser.parse_file(path)?;
        Ok(FileReport {
            source,
            report: self.profile(&rows),
        })
    }

    /// Decode and profile delimited text held in memory.
    pub fn profile_csv_bytes(&self, bytes: &[u8]) -> Result<ProfileReport> {
        let parser = Parser::with_config(self.config.parser.clone());
        let rows = parser.parse_bytes(bytes)?;
        Ok(self.profile(&rows))
    }

    /// Decode and profile a JSON array of row objects held in memory.
    pub fn profile_json_bytes(&self, bytes: &[u8]) -> Result<ProfileReport> {
        let parser = Parser::with_config(self.config.parser.clone());
        let rows = parser.parse_json(bytes)?;
        Ok(self.profile(&rows))
    }
}

/// Profile a row set with default settings.
pub fn profile(rows: &RowSet) -> ProfileReport {
    Profiler::new().profile(rows)
}
