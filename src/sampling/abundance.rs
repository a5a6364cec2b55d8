//! Species abundance models.
//!
//! Three generators for the regional species pool:
//! - Fisher log-series (heavy-tailed, the default)
//! - Lognormal shifted by one individual
//! - Uniform split of a fixed number of individuals

use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOGNORMAL_SHAPE, DEFAULT_LOGSERIES_SHAPE, DEFAULT_UNIFORM_INDIVIDUALS,
};
use crate::error::{HillError, Result};

/// Generator of per-species abundance counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AbundanceModel {
    /// Fisher log-series, `P(n) ∝ pⁿ / n` with `p = exp(-shape)`.
    LogSeries {
        /// Decay rate; smaller values give heavier tails.
        shape: f64,
    },
    /// `floor(1 + exp(shape · Z))` with `Z ~ N(0, 1)`.
    LogNormal {
        /// Standard deviation of the underlying normal.
        shape: f64,
    },
    /// Every species receives `individuals / S`, rounded down.
    Uniform {
        /// Total individuals in the pool.
        individuals: f64,
    },
}

impl Default for AbundanceModel {
    fn default() -> Self {
        AbundanceModel::LogSeries {
            shape: DEFAULT_LOGSERIES_SHAPE,
        }
    }
}

impl AbundanceModel {
    /// Log-series with the given shape.
    pub fn log_series(shape: f64) -> Self {
        AbundanceModel::LogSeries { shape }
    }

    /// Lognormal with the default shape (1.98).
    pub fn log_normal() -> Self {
        AbundanceModel::LogNormal {
            shape: DEFAULT_LOGNORMAL_SHAPE,
        }
    }

    /// Uniform split of the default pool size (750,000 individuals).
    pub fn uniform() -> Self {
        AbundanceModel::Uniform {
            individuals: DEFAULT_UNIFORM_INDIVIDUALS,
        }
    }

    /// Short model name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            AbundanceModel::LogSeries { .. } => "logseries",
            AbundanceModel::LogNormal { .. } => "lognormal",
            AbundanceModel::Uniform { .. } => "uniform",
        }
    }

    /// Check parameters are inside the model's domain.
    pub fn validate(&self) -> Result<()> {
        match *self {
            AbundanceModel::LogSeries { shape } if !(shape.is_finite() && shape > 0.0) => Err(
                HillError::invalid_abundance(format!("log-series shape must be > 0, got {shape}")),
            ),
            AbundanceModel::LogNormal { shape } if !(shape.is_finite() && shape >= 0.0) => Err(
                HillError::invalid_abundance(format!("lognormal shape must be >= 0, got {shape}")),
            ),
            AbundanceModel::Uniform { individuals }
                if !(individuals.is_finite() && individuals > 0.0) =>
            {
                Err(HillError::invalid_abundance(format!(
                    "uniform pool size must be > 0, got {individuals}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Draw abundance counts for `species` species.
    ///
    /// # Errors
    ///
    /// Returns [`HillError::InvalidAbundance`] if the parameters are invalid.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, species: usize) -> Result<Vec<u64>> {
        self.validate()?;
        let counts = match *self {
            AbundanceModel::LogSeries { shape } => {
                let p = (-shape).exp();
                (0..species).map(|_| sample_log_series(p, rng)).collect()
            }
            AbundanceModel::LogNormal { shape } => {
                let dist = LogNormal::new(0.0, shape)
                    .map_err(|e| HillError::invalid_abundance(e.to_string()))?;
                (0..species)
                    .map(|_| (1.0 + dist.sample(rng)).floor() as u64)
                    .collect()
            }
            AbundanceModel::Uniform { individuals } => {
                let each = (individuals / species as f64).floor() as u64;
                vec![each; species]
            }
        };
        Ok(counts)
    }
}

/// Draw one log-series variate with parameter `p` in (0, 1).
///
/// Kemp's LK algorithm (Kemp 1981), as used by numpy.
fn sample_log_series<R: Rng + ?Sized>(p: f64, rng: &mut R) -> u64 {
    let r = (-p).ln_1p();

    loop {
        let v: f64 = rng.random();
        if v >= p {
            return 1;
        }

        let u: f64 = rng.random();
        let q = -(r * u).exp_m1();
        if v <= q * q {
            let result = (1.0 + v.ln() / q.ln()).floor();
            if result < 1.0 || v == 0.0 {
                continue;
            }
            return result as u64;
        }
        if v >= q {
            return 1;
        }
        return 2;
    }
}
