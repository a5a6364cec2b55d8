//! Type aliases and common types.

use nalgebra::{DMatrix, SMatrix, SVector};
use serde::{Deserialize, Serialize};

/// 2x2 covariance matrix for the attribute space.
pub type Matrix2 = SMatrix<f64, 2, 2>;

/// A point in the two-dimensional attribute space.
pub type Vector2 = SVector<f64, 2>;

/// Pairwise abundance weights `p_i * p_j`. Symmetric, sums to 1.
pub type WeightMatrix = DMatrix<f64>;

/// Pairwise attribute distances. Symmetric with a zero diagonal.
pub type DistanceMatrix = DMatrix<f64>;

/// Correlation regime of the simulated attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Attributes drawn with non-zero covariance.
    Correlated,
    /// Attributes drawn independently.
    Uncorrelated,
}

impl Regime {
    /// Both regimes in column order.
    pub const ALL: [Regime; 2] = [Regime::Correlated, Regime::Uncorrelated];

    /// Column-name prefix for this regime.
    pub fn prefix(self) -> &'static str {
        match self {
            Regime::Correlated => "cor",
            Regime::Uncorrelated => "noc",
        }
    }

    /// Column name for this regime at diversity order `q`, e.g. `cor1`.
    pub fn column(self, q: f64) -> String {
        format!("{}{}", self.prefix(), q)
    }
}
