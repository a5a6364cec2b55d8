//! Default experiment parameters.

/// Diversity orders evaluated by the reference experiment.
pub const DEFAULT_ORDERS: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Species drawn per trial.
pub const DEFAULT_SPECIES: usize = 1000;

/// Independent trials per experiment.
pub const DEFAULT_TRIALS: usize = 200;

/// Concurrent workers for trial dispatch.
pub const DEFAULT_WORKERS: usize = 10;

/// Covariance between the two attributes in the correlated regime.
pub const DEFAULT_COVARIANCE: f64 = 0.75;

/// Fisher log-series shape (`p = exp(-shape)`).
pub const DEFAULT_LOGSERIES_SHAPE: f64 = 0.05;

/// Lognormal sigma used by the lognormal abundance model.
pub const DEFAULT_LOGNORMAL_SHAPE: f64 = 1.98;

/// Total individuals split evenly by the uniform abundance model.
pub const DEFAULT_UNIFORM_INDIVIDUALS: f64 = 750_000.0;

/// Quantile probabilities reported per column: lower, median, upper.
pub const SUMMARY_PROBABILITIES: [f64; 3] = [0.025, 0.5, 0.975];
