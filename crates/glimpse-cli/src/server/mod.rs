//! HTTP API for profiling uploaded data.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
