//! Single-trial simulation.
//!
//! One trial draws a correlated and an uncorrelated attribute sample for the
//! same species, one abundance vector, and evaluates the Hill profile of both
//! regimes against the shared abundance weights.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::community::{abundance_weights, pairwise_distances};
use crate::config::Config;
use crate::error::Result;
use crate::hill::hill_profile;
use crate::sampling::{AbundanceModel, BivariateNormal};
use crate::types::Regime;

/// Hill profiles of one trial, one value per diversity order and regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Profile under correlated attributes.
    pub correlated: Vec<f64>,
    /// Profile under uncorrelated attributes.
    pub uncorrelated: Vec<f64>,
}

impl TrialResult {
    /// Profile for one regime.
    pub fn profile(&self, regime: Regime) -> &[f64] {
        match regime {
            Regime::Correlated => &self.correlated,
            Regime::Uncorrelated => &self.uncorrelated,
        }
    }

    /// Row values: correlated orders first, then uncorrelated.
    pub fn values(&self) -> Vec<f64> {
        self.correlated
            .iter()
            .chain(self.uncorrelated.iter())
            .copied()
            .collect()
    }
}

/// Draws trials for a fixed configuration.
///
/// Cholesky factors are computed once at construction; each call to
/// [`simulate`](Self::simulate) draws fresh samples from the supplied RNG.
#[derive(Debug, Clone)]
pub struct TrialSimulator {
    species: usize,
    correlated: BivariateNormal,
    uncorrelated: BivariateNormal,
    abundance: AbundanceModel,
    orders: Vec<f64>,
}

impl TrialSimulator {
    /// Build a simulator from an experiment configuration.
    ///
    /// # Errors
    ///
    /// Propagates configuration and covariance errors.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            species: config.species,
            correlated: BivariateNormal::standard(config.covariance)?,
            uncorrelated: BivariateNormal::standard(0.0)?,
            abundance: config.abundance,
            orders: config.orders.clone(),
        })
    }

    /// Diversity orders evaluated per regime.
    pub fn orders(&self) -> &[f64] {
        &self.orders
    }

    /// Species drawn per trial.
    pub fn species(&self) -> usize {
        self.species
    }

    /// Run one trial.
    ///
    /// Degenerate draws yield NaN values in the result rather than errors.
    ///
    /// # Errors
    ///
    /// Only abundance-parameter errors, which [`TrialSimulator::new`] already
    /// rules out.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrialResult> {
        let xcor = self.correlated.sample_n(rng, self.species);
        let xnoc = self.uncorrelated.sample_n(rng, self.species);
        let counts = self.abundance.sample_n(rng, self.species)?;

        let pij = abundance_weights(&counts);
        let dij_cor = pairwise_distances(&xcor);
        let dij_noc = pairwise_distances(&xnoc);

        Ok(TrialResult {
            correlated: hill_profile(&dij_cor, &pij, &self.orders),
            uncorrelated: hill_profile(&dij_noc, &pij, &self.orders),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::trial_rng;

    fn small_config() -> Config {
        Config {
            species: 40,
            ..Config::default()
        }
    }

    #[test]
    fn test_trial_shape() {
        let sim = TrialSimulator::new(&small_config()).unwrap();
        let result = sim.simulate(&mut trial_rng(1, 0)).unwrap();
        assert_eq!(result.correlated.len(), 4);
        assert_eq!(result.uncorrelated.len(), 4);

        let values = result.values();
        assert_eq!(values.len(), 8);
        assert_eq!(&values[..4], result.profile(Regime::Correlated));
        assert_eq!(&values[4..], result.profile(Regime::Uncorrelated));
        assert!(values.iter().all(|v| v.is_finite() && *v > 0.0), "{:?}", values);
    }

    #[test]
    fn test_same_seed_same_trial() {
        let sim = TrialSimulator::new(&small_config()).unwrap();
        let a = sim.simulate(&mut trial_rng(77, 3)).unwrap();
        let b = sim.simulate(&mut trial_rng(77, 3)).unwrap();
        let c = sim.simulate(&mut trial_rng(77, 4)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_profiles_decrease_with_order() {
        let sim = TrialSimulator::new(&small_config()).unwrap();
        let result = sim.simulate(&mut trial_rng(5, 0)).unwrap();
        for profile in [&result.correlated, &result.uncorrelated] {
            for pair in profile.windows(2) {
                assert!(pair[1] <= pair[0] + 1e-9, "{:?}", profile);
            }
        }
    }

    #[test]
    fn test_single_species_is_degenerate() {
        // One species: every distance is zero, so Q = 0 and values are NaN
        let config = Config {
            species: 1,
            ..Config::default()
        };
        let sim = TrialSimulator::new(&config).unwrap();
        let result = sim.simulate(&mut trial_rng(3, 0)).unwrap();
        assert!(result.values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            covariance: 2.0,
            ..Config::default()
        };
        assert!(TrialSimulator::new(&config).is_err());
    }
}
