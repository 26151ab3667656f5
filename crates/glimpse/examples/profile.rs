//! Example: Profile a tabular data file with Glimpse.
//!
//! Usage:
//!   cargo run --example profile -- <file_path>
//!
//! Example:
//!   cargo run --example profile -- data/sales.csv

use std::env;
use std::path::Path;

use glimpse::{ColumnSummary, Profiler};

fn main() -> glimpse::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example profile -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example profile -- data/sales.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Glimpse Profile: {}", file_path);
    println!("{}", separator);
    println!();

    let result = Profiler::new().profile_file(path)?;
    let profile = &result.report.profile;

    println!("## Source Metadata");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!("## Columns ({})", profile.column_count);
    println!();
    for (name, summary) in &profile.summaries {
        match summary {
            ColumnSummary::Numeric(stats) => println!(
                "  {:20} numeric      min={:?} max={:?} mean={:?} median={:?} valid={}",
                name, stats.min, stats.max, stats.mean, stats.median, stats.valid_count
            ),
            ColumnSummary::Categorical(counts) => println!(
                "  {:20} categorical  total={} unique={}",
                name, counts.total_count, counts.unique_count
            ),
        }
    }
    println!();

    let charts = &result.report.charts;
    println!("## Bar ({} entries)", charts.bar.len());
    for point in &charts.bar {
        println!("  {:20} {:.2}", point.label, point.value);
    }
    println!();

    println!("## Pie ({} slices)", charts.pie.len());
    for slice in &charts.pie {
        println!("  {:20} {}", slice.label, slice.count);
    }
    println!();

    println!("## Line ({} points)", charts.line.len());
    for point in &charts.line {
        println!("  {:>3}  {:>12.2}  {:>12.2}", point.index, point.series_a, point.series_b);
    }
    println!();

    println!("{}", separator);

    Ok(())
}
