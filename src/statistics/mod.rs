//! Statistical summaries across trials.
//!
//! - Quantile computation (R-7 linear interpolation)
//! - Per-column 2.5 / 50 / 97.5 percentile bands of a result table

mod quantile;
mod summary;

pub use quantile::{compute_quantiles, compute_quantiles_sorted};
pub use summary::{ColumnSummary, Summary};
