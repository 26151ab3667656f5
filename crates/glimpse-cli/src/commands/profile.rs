//! Profile command - classify columns and summarize a data file.

use std::path::PathBuf;

use colored::Colorize;
use glimpse::input::parse_delimiter;
use glimpse::{ColumnSummary, FileReport, MedianStrategy, ParserConfig, Profiler, ProfilerConfig};

/// Arguments of the `profile` subcommand.
pub struct ProfileArgs {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub delimiter: Option<String>,
    pub max_rows: Option<usize>,
    pub no_typing: bool,
    pub interpolated_median: bool,
}

impl ProfileArgs {
    /// Profiler configuration with the flags applied over the defaults.
    fn profiler_config(&self) -> Result<ProfilerConfig, Box<dyn std::error::Error>> {
        let parser = ParserConfig {
            delimiter: self.delimiter.as_deref().map(parse_delimiter).transpose()?,
            max_rows: self.max_rows,
            dynamic_typing: !self.no_typing,
            ..ParserConfig::default()
        };
        let median = if self.interpolated_median {
            MedianStrategy::Interpolated
        } else {
            MedianStrategy::Naive
        };

        Ok(ProfilerConfig {
            parser,
            median,
            ..ProfilerConfig::default()
        })
    }
}

pub fn run(args: ProfileArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let profiler = Profiler::with_config(args.profiler_config()?);

    if !args.json {
        println!(
            "{} {}",
            "Profiling".cyan().bold(),
            args.file.display().to_string().white()
        );
    }

    let result = profiler.profile_file(&args.file)?;

    if let Some(ref output) = args.output {
        std::fs::write(output, serde_json::to_string_pretty(&result)?)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&result);

    if let Some(output) = args.output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            output.display().to_string().white()
        );
    }

    Ok(())
}

fn print_summary(result: &FileReport) {
    let profile = &result.report.profile;

    println!(
        "Read {} rows, {} columns ({})",
        profile.row_count.to_string().white().bold(),
        profile.column_count.to_string().white().bold(),
        result.source.format
    );

    if profile.is_empty() {
        println!("{}", "No data rows found".yellow());
        return;
    }

    println!(
        "{} numeric, {} categorical",
        profile.numeric_columns.len().to_string().green(),
        profile.categorical_columns.len().to_string().blue()
    );
    println!();

    for (name, summary) in &profile.summaries {
        match summary {
            ColumnSummary::Numeric(stats) => println!(
                "  {:20} {:12} min {}  max {}  mean {}  median {}  ({} valid)",
                name,
                "numeric".green(),
                format_stat(stats.min),
                format_stat(stats.max),
                format_stat(stats.mean),
                format_stat(stats.median),
                stats.valid_count
            ),
            ColumnSummary::Categorical(counts) => println!(
                "  {:20} {:12} {} values, {} unique",
                name,
                "categorical".blue(),
                counts.total_count,
                counts.unique_count
            ),
        }
    }
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string(),
        None => "-".to_string(),
    }
}
