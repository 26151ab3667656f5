//! Charts command - print the bar, pie and line views of a data file.

use std::path::PathBuf;

use colored::Colorize;
use glimpse::{ChartSet, Profiler};

/// Width of the longest text bar.
const BAR_WIDTH: usize = 40;

pub fn run(file: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Profiler::new().profile_file(&file)?;
    let charts = &result.report.charts;

    if json_output {
        println!("{}", serde_json::to_string_pretty(charts)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Charts for".cyan().bold(),
        file.display().to_string().white()
    );

    if charts.is_empty() {
        println!("{}", "No chartable data".yellow());
        return Ok(());
    }

    print_charts(charts);
    Ok(())
}

fn print_charts(charts: &ChartSet) {
    if !charts.bar.is_empty() {
        println!();
        println!("{}", "Bar:".yellow().bold());
        let max = charts.bar.iter().map(|p| p.value.abs()).fold(0.0, f64::max);
        for point in &charts.bar {
            println!(
                "  {:20} {} {}",
                point.label,
                bar(point.value.abs(), max).green(),
                point.value
            );
        }
    }

    if !charts.pie.is_empty() {
        println!();
        println!("{}", "Pie:".yellow().bold());
        let total: usize = charts.pie.iter().map(|s| s.count).sum();
        for slice in &charts.pie {
            let share = slice.count as f64 / total as f64 * 100.0;
            println!(
                "  {:20} {} {} ({:.1}%)",
                slice.label,
                bar(slice.count as f64, total as f64).blue(),
                slice.count,
                share
            );
        }
    }

    if !charts.line.is_empty() {
        println!();
        println!("{}", "Line:".yellow().bold());
        for point in &charts.line {
            println!(
                "  {:>4}  {:>12}  {:>12}",
                point.index, point.series_a, point.series_b
            );
        }
    }
}

/// A run of block characters proportional to `value / max`.
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}
