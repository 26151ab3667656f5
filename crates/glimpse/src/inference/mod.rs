//! Column classification and per-column statistics.

mod classifier;
mod statistics;

pub use classifier::{Classification, TypeInferencer};
pub use statistics::{MedianStrategy, StatisticsComputer};
pub(crate) use statistics::running_mean;
