//! Types describing an inferred dataset profile.

mod column;
mod profile;
mod types;

pub use column::{CategoricalSummary, ColumnSummary, NumericSummary};
pub use profile::DatasetProfile;
pub use types::ColumnKind;
