//! Joint Hill numbers over pairwise distance and abundance-weight matrices.
//!
//! Two layers:
//!
//! 1. **Hill number** ([`number`]): one value for one diversity order `q`
//! 2. **Profile** ([`profile`]): values for a sequence of orders, normalized by
//!    the total pairwise-weighted distance `Q` and rescaled to effective
//!    diversity
//!
//! Both are pure functions. Degenerate inputs (`Q == 0`) produce NaN or
//! infinite values rather than errors.

mod number;
mod profile;

pub use number::hill_number;
pub use profile::{hill_profile, total_weighted_distance};
