//! Rendering of experiment results.
//!
//! - [`json`]: serde_json encodings of tables and summaries
//! - [`terminal`]: colored summary table
//! - [`plot`]: SVG ribbon chart (feature `plot`)

pub mod json;
#[cfg(feature = "plot")]
pub mod plot;
pub mod terminal;
