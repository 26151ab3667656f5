//! Profiling handlers.

use axum::{body::Bytes, extract::State, Json};
use glimpse::{ProfileReport, Profiler};
use log::debug;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Profile a JSON array of row objects.
pub async fn profile_json(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProfileReport>, ApiError> {
    debug!("profiling {} byte JSON upload", body.len());
    run_blocking(state, body, Profiler::profile_json_bytes).await
}

/// Profile a CSV/TSV text body.
pub async fn profile_csv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProfileReport>, ApiError> {
    debug!("profiling {} byte delimited upload", body.len());
    run_blocking(state, body, Profiler::profile_csv_bytes).await
}

/// Decode and profile on the blocking pool.
async fn run_blocking(
    state: AppState,
    body: Bytes,
    profile: fn(&Profiler, &[u8]) -> glimpse::Result<ProfileReport>,
) -> Result<Json<ProfileReport>, ApiError> {
    let profiler = state.profiler.clone();
    let report = tokio::task::spawn_blocking(move || profile(&profiler, &body)).await??;
    Ok(Json(report))
}
