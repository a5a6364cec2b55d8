//! Hill profiles across several diversity orders.

use nalgebra::DMatrix;

use super::number::hill_number;

/// Total pairwise-weighted distance `Q = Σ V_ij A_ij` (Rao's quadratic entropy
/// when `A` holds `p_i p_j`).
///
/// # Panics
///
/// Panics if `v` and `a` differ in shape.
pub fn total_weighted_distance(v: &DMatrix<f64>, a: &DMatrix<f64>) -> f64 {
    assert_eq!(v.shape(), a.shape(), "Weight and abundance matrices must match");
    v.component_mul(a).sum()
}

/// Compute effective diversities for each order in `orders`.
///
/// For every `q` the Hill number `h` is rescaled to `sqrt(h / Q)`. The output
/// has the same length and order as `orders`.
///
/// `Q == 0` (all distances or all weights zero) is a known degenerate input
/// and yields non-finite values.
///
/// # Example
///
/// ```
/// use joint_hill::hill::hill_profile;
/// use nalgebra::DMatrix;
///
/// let d = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
/// let p = DMatrix::from_element(2, 2, 0.25);
/// let profile = hill_profile(&d, &p, &[2.0]);
/// assert!((profile[0] - 2.0).abs() < 1e-12);
/// ```
pub fn hill_profile(v: &DMatrix<f64>, a: &DMatrix<f64>, orders: &[f64]) -> Vec<f64> {
    let total = total_weighted_distance(v, a);
    orders
        .iter()
        .map(|&q| (hill_number(v, a, q, total) / total).sqrt())
        .collect()
}
