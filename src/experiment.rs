//! Main `Experiment` entry point and builder.

use std::time::Instant;

use tracing::{info, trace, warn};

use crate::config::Config;
use crate::error::Result;
use crate::result::ResultTable;
use crate::sampling::{trial_rng, AbundanceModel};
use crate::thread_pool::map_indexed;
use crate::trial::TrialSimulator;

/// Repeats independent trials and collects their Hill profiles.
///
/// # Example
///
/// ```
/// use joint_hill::Experiment;
///
/// let table = Experiment::quick()
///     .species(30)
///     .trials(5)
///     .seed(7)
///     .run()
///     .unwrap();
///
/// assert_eq!(table.len(), 5);
/// assert_eq!(table.columns.len(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Experiment {
    config: Config,
}

impl Experiment {
    /// Create with default configuration: 1,000 species, 200 trials,
    /// 10 workers, log-series abundances, covariance 0.75, orders 1-4.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with a small configuration for tests and previews.
    ///
    /// Settings:
    /// - 100 species (vs 1,000 default)
    /// - 20 trials (vs 200 default)
    /// - 2 workers (vs 10 default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                species: 100,
                trials: 20,
                workers: 2,
                ..Config::default()
            },
        }
    }

    /// Create from an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set species per trial.
    pub fn species(mut self, n: usize) -> Self {
        self.config.species = n;
        self
    }

    /// Set number of trials.
    pub fn trials(mut self, n: usize) -> Self {
        self.config.trials = n;
        self
    }

    /// Set number of concurrent workers.
    pub fn workers(mut self, n: usize) -> Self {
        self.config.workers = n;
        self
    }

    /// Set the abundance model.
    pub fn abundance(mut self, model: AbundanceModel) -> Self {
        self.config.abundance = model;
        self
    }

    /// Set the attribute covariance of the correlated regime.
    pub fn covariance(mut self, rho: f64) -> Self {
        self.config.covariance = rho;
        self
    }

    /// Set the diversity orders.
    pub fn orders(mut self, orders: impl Into<Vec<f64>>) -> Self {
        self.config.orders = orders.into();
        self
    }

    /// Set deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run every trial and collect the result table.
    ///
    /// Rows are in trial order. For a fixed seed the table is identical for
    /// any worker count. NaN cells from degenerate draws are kept.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration or if the worker pool
    /// cannot be built.
    pub fn run(&self) -> Result<ResultTable> {
        let start = Instant::now();
        let simulator = TrialSimulator::new(&self.config)?;
        let seed = self.config.seed.unwrap_or_else(rand::random);

        info!(
            species = self.config.species,
            trials = self.config.trials,
            workers = self.config.workers,
            abundance = self.config.abundance.name(),
            seed,
            "starting experiment"
        );

        let trials = map_indexed(self.config.workers, self.config.trials, |i| {
            trace!(trial = i, "simulating trial");
            let mut rng = trial_rng(seed, i);
            simulator.simulate(&mut rng)
        })?;

        let table = ResultTable::from_trials(simulator.orders(), &trials);

        let non_finite = table.non_finite_count();
        if non_finite > 0 {
            warn!(non_finite, "result table contains non-finite values");
        }
        info!(
            rows = table.len(),
            elapsed_secs = start.elapsed().as_secs_f64(),
            "experiment finished"
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HillError;

    #[test]
    fn test_experiment_default_config() {
        let experiment = Experiment::new();
        assert_eq!(experiment.config().species, 1000);
        assert_eq!(experiment.config().trials, 200);
        assert_eq!(experiment.config().workers, 10);
        assert_eq!(experiment.config().seed, None);
    }

    #[test]
    fn test_experiment_builder() {
        let experiment = Experiment::new()
            .species(500)
            .trials(50)
            .workers(4)
            .covariance(0.5)
            .orders(vec![0.0, 1.0, 2.0])
            .abundance(AbundanceModel::uniform())
            .seed(99);

        let config = experiment.config();
        assert_eq!(config.species, 500);
        assert_eq!(config.trials, 50);
        assert_eq!(config.workers, 4);
        assert_eq!(config.covariance, 0.5);
        assert_eq!(config.orders, vec![0.0, 1.0, 2.0]);
        assert_eq!(config.abundance, AbundanceModel::uniform());
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_experiment_quick() {
        let experiment = Experiment::quick();
        assert_eq!(experiment.config().species, 100);
        assert_eq!(experiment.config().trials, 20);
        assert_eq!(experiment.config().workers, 2);
    }

    #[test]
    fn test_row_count_independent_of_workers() {
        for workers in [1, 4] {
            let table = Experiment::quick()
                .species(25)
                .trials(12)
                .workers(workers)
                .run()
                .unwrap();
            assert_eq!(table.len(), 12);
            assert!(table.rows.iter().all(|row| row.len() == 8));
        }
    }

    #[test]
    fn test_seeded_runs_match_across_workers() {
        let base = Experiment::quick().species(25).trials(8).seed(1234);
        let one = base.clone().workers(1).run().unwrap();
        let many = base.workers(6).run().unwrap();
        assert_eq!(one, many);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let err = Experiment::quick().trials(0).run().unwrap_err();
        assert!(matches!(err, HillError::InvalidConfig { .. }));
    }
}
