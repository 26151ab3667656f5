//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glimpse: profile tabular data and build chart-ready summaries
#[derive(Parser)]
#[command(name = "glimpse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file: column kinds and per-column statistics
    Profile {
        /// Path to the data file (CSV/TSV or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON report instead of a summary
        #[arg(long)]
        json: bool,

        /// Field delimiter (comma, tab, semicolon, pipe or a single character)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Stop reading after this many data rows
        #[arg(long)]
        max_rows: Option<usize>,

        /// Keep every field as text instead of detecting numbers and booleans
        #[arg(long)]
        no_typing: bool,

        /// Average the two middle values for even-length medians
        #[arg(long)]
        interpolated_median: bool,
    },

    /// Show the bar, pie and line views of a data file
    Charts {
        /// Path to the data file (CSV/TSV or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the profiling HTTP API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_profile_flags() {
        let cli = Cli::try_parse_from([
            "glimpse",
            "profile",
            "data.tsv",
            "-d",
            "tab",
            "--max-rows",
            "50",
            "--no-typing",
            "--interpolated-median",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Profile {
                file,
                delimiter,
                max_rows,
                no_typing,
                interpolated_median,
                json,
                output,
            } => {
                assert_eq!(file, PathBuf::from("data.tsv"));
                assert_eq!(delimiter.as_deref(), Some("tab"));
                assert_eq!(max_rows, Some(50));
                assert!(no_typing);
                assert!(interpolated_median);
                assert!(!json);
                assert!(output.is_none());
            }
            _ => panic!("expected profile command"),
        }
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["glimpse", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: 3141 }));
    }
}
