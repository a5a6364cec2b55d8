//! Error types for experiment setup and output.
//!
//! Numeric degeneracies (zero total distance, `ln 0`) are never reported here:
//! they surface as NaN cells in the [`ResultTable`](crate::ResultTable).

use thiserror::Error;

/// Errors raised while configuring, running or exporting an experiment.
#[derive(Debug, Error)]
pub enum HillError {
    /// A configuration field holds an unusable value.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },

    /// Covariance matrix has no Cholesky factor.
    #[error("Covariance matrix is not positive definite: [[{a}, {b}], [{b}, {d}]]")]
    NotPositiveDefinite {
        /// Variance of the first attribute
        a: f64,
        /// Covariance between the attributes
        b: f64,
        /// Variance of the second attribute
        d: f64,
    },

    /// Abundance model parameter outside its domain.
    #[error("Invalid abundance model: {message}")]
    InvalidAbundance {
        /// Description of the offending parameter
        message: String,
    },

    /// Column name not present in the result table.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Worker pool could not be built.
    #[cfg(feature = "parallel")]
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart rendering failed.
    #[error("Plot error: {0}")]
    Plot(String),
}

impl HillError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an InvalidAbundance error.
    pub fn invalid_abundance(message: impl Into<String>) -> Self {
        Self::InvalidAbundance {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HillError::invalid_config("trials must be > 0");
        assert_eq!(err.to_string(), "Invalid configuration: trials must be > 0");

        let err = HillError::NotPositiveDefinite {
            a: 1.0,
            b: 1.0,
            d: 1.0,
        };
        assert!(err.to_string().contains("not positive definite"));

        let err = HillError::UnknownColumn("cor9".to_string());
        assert_eq!(err.to_string(), "Unknown column: cor9");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HillError = io.into();
        assert!(matches!(err, HillError::Io(_)));
    }
}
