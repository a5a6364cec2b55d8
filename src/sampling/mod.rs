//! Random collaborators for trial simulation.
//!
//! - Bivariate normal draws for species attributes ([`BivariateNormal`])
//! - Species abundance counts ([`AbundanceModel`])
//! - Counter-based seeding so each trial owns an independent RNG

mod abundance;
mod bivariate;
mod seed;

pub use abundance::AbundanceModel;
pub use bivariate::BivariateNormal;
pub use seed::{counter_rng_seed, trial_rng, TrialRng};
