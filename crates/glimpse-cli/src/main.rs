//! Glimpse CLI - dataset profiling from the command line and over HTTP.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Profile {
            file,
            output,
            json,
            delimiter,
            max_rows,
            no_typing,
            interpolated_median,
        } => commands::profile::run(commands::profile::ProfileArgs {
            file,
            output,
            json,
            delimiter,
            max_rows,
            no_typing,
            interpolated_median,
        }),

        Commands::Charts { file, json } => commands::charts::run(file, json),

        Commands::Serve { port } => commands::serve::run(port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the logger: `RUST_LOG` wins, otherwise warn (debug with `--verbose`).
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
