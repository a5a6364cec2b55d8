//! Configuration for joint Hill experiments.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COVARIANCE, DEFAULT_ORDERS, DEFAULT_SPECIES, DEFAULT_TRIALS, DEFAULT_WORKERS,
};
use crate::error::{HillError, Result};
use crate::sampling::AbundanceModel;

/// Configuration options for [`Experiment`](crate::Experiment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Species drawn per trial (default: 1,000).
    pub species: usize,

    /// Independent trials (default: 200).
    pub trials: usize,

    /// Concurrent workers for trial dispatch (default: 10).
    ///
    /// Only affects throughput. Results for a given seed are the same for
    /// any worker count.
    pub workers: usize,

    /// Abundance model for species counts (default: log-series, shape 0.05).
    pub abundance: AbundanceModel,

    /// Covariance between the two unit-variance attributes in the correlated
    /// regime (default: 0.75).
    pub covariance: f64,

    /// Diversity orders to evaluate (default: 1, 2, 3, 4).
    pub orders: Vec<f64>,

    /// Optional deterministic seed. A fresh seed is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            species: DEFAULT_SPECIES,
            trials: DEFAULT_TRIALS,
            workers: DEFAULT_WORKERS,
            abundance: AbundanceModel::default(),
            covariance: DEFAULT_COVARIANCE,
            orders: DEFAULT_ORDERS.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Check every field is usable before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`HillError::InvalidConfig`] for bad counts, orders or
    /// covariance, and [`HillError::InvalidAbundance`] for bad abundance
    /// parameters.
    pub fn validate(&self) -> Result<()> {
        if self.species == 0 {
            return Err(HillError::invalid_config("species must be > 0"));
        }
        if self.trials == 0 {
            return Err(HillError::invalid_config("trials must be > 0"));
        }
        if self.workers == 0 {
            return Err(HillError::invalid_config("workers must be > 0"));
        }
        if self.orders.is_empty() {
            return Err(HillError::invalid_config("at least one diversity order is required"));
        }
        if let Some(q) = self.orders.iter().find(|q| !(q.is_finite() && **q >= 0.0)) {
            return Err(HillError::invalid_config(format!(
                "diversity orders must be finite and >= 0, got {q}"
            )));
        }
        if !(self.covariance.is_finite() && self.covariance.abs() < 1.0) {
            return Err(HillError::invalid_config(format!(
                "covariance must lie in (-1, 1), got {}",
                self.covariance
            )));
        }
        self.abundance.validate()
    }
}
