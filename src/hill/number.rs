//! Generalized Hill number for a single diversity order.
//!
//! ```text
//! q == 1:  D = exp( -Σ V_ij (A_ij/Q) ln(A_ij/Q) )
//! q != 1:  D = ( Σ V_ij (A_ij/Q)^q )^(1/(1-q))
//! ```
//!
//! The two branches are selected by exact equality on `q`. The `q == 1` form
//! is the limit of the general form, which is otherwise singular there.

use nalgebra::DMatrix;

/// Compute the Hill number of order `q`.
///
/// # Arguments
///
/// * `v` - Pair weights (distances in the joint-trait setting)
/// * `a` - Pair abundance weights, same shape as `v`
/// * `q` - Diversity order
/// * `total` - Normalization constant `Q`, normally `Σ V_ij A_ij`
///
/// Terms with `A_ij == 0` contribute nothing to the `q == 1` sum (0·ln0 = 0).
/// No other guarding is done: `total == 0` yields NaN or infinity.
///
/// # Panics
///
/// Panics if `v` and `a` differ in shape.
pub fn hill_number(v: &DMatrix<f64>, a: &DMatrix<f64>, q: f64, total: f64) -> f64 {
    assert_eq!(v.shape(), a.shape(), "Weight and abundance matrices must match");

    if q == 1.0 {
        let entropy: f64 = v
            .iter()
            .zip(a.iter())
            .filter(|&(_, &a_ij)| a_ij != 0.0)
            .map(|(&v_ij, &a_ij)| {
                let w = a_ij / total;
                v_ij * w * w.ln()
            })
            .sum();
        (-entropy).exp()
    } else {
        let sum: f64 = v
            .iter()
            .zip(a.iter())
            .map(|(&v_ij, &a_ij)| v_ij * (a_ij / total).powf(q))
            .sum();
        sum.powf(1.0 / (1.0 - q))
    }
}
