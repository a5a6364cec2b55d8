//! Bivariate normal sampling via Cholesky factorization.

use nalgebra::Cholesky;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{HillError, Result};
use crate::types::{Matrix2, Vector2};

/// Bivariate normal distribution with a cached Cholesky factor.
///
/// Draws are `mean + L z` with `z ~ N(0, I)` and `L Lᵀ = Σ`.
#[derive(Debug, Clone)]
pub struct BivariateNormal {
    mean: Vector2,
    factor: Matrix2,
}

impl BivariateNormal {
    /// Create from a mean vector and a covariance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`HillError::NotPositiveDefinite`] if `covariance` has no
    /// Cholesky factor.
    pub fn new(mean: Vector2, covariance: Matrix2) -> Result<Self> {
        let chol = Cholesky::new(covariance).ok_or(HillError::NotPositiveDefinite {
            a: covariance[(0, 0)],
            b: covariance[(0, 1)],
            d: covariance[(1, 1)],
        })?;
        Ok(Self {
            mean,
            factor: chol.l(),
        })
    }

    /// Zero mean, unit variances, covariance `rho` between the attributes.
    pub fn standard(rho: f64) -> Result<Self> {
        Self::new(Vector2::zeros(), Matrix2::new(1.0, rho, rho, 1.0))
    }

    /// Mean vector.
    pub fn mean(&self) -> &Vector2 {
        &self.mean
    }

    /// Lower-triangular Cholesky factor of the covariance.
    pub fn factor(&self) -> &Matrix2 {
        &self.factor
    }

    /// Draw `n` independent points.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Vector2> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

impl Distribution<Vector2> for BivariateNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        let z = Vector2::from_fn(|_, _| StandardNormal.sample(rng));
        self.mean + self.factor * z
    }
}
