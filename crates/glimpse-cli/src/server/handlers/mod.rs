//! API request handlers.

mod health;
mod profile;

pub use health::*;
pub use profile::*;
