//! Serve command - run the profiling HTTP API.

use colored::Colorize;
use glimpse::Profiler;

use crate::server::{app, state::AppState};

pub fn run(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(Profiler::new());

    println!(
        "{} {}",
        "Serving".cyan().bold(),
        format!("http://127.0.0.1:{}/api", port).white()
    );
    println!("Press Ctrl+C to stop");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port, shutdown_signal()))
}

/// Resolves on Ctrl+C; in-flight requests are allowed to finish.
async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    println!();
    println!("{}", "Shutting down...".yellow());
}
