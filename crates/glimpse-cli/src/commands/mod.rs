//! CLI command implementations.

pub mod charts;
pub mod profile;
pub mod serve;
