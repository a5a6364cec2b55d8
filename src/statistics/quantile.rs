//! Quantile computation.
//!
//! All functions use the R-7 definition (linear interpolation between order
//! statistics), which matches numpy's default percentile. NaN values sort
//! after every finite value under `total_cmp`.

/// Compute several quantiles from pre-sorted data.
///
/// # Panics
///
/// Panics if `sorted` is empty.
///
/// The caller must ensure the data is sorted ascending. No verification is
/// performed.
pub fn compute_quantiles_sorted(sorted: &[f64], probabilities: &[f64]) -> Vec<f64> {
    assert!(!sorted.is_empty(), "Cannot compute quantiles of empty slice");

    let n = sorted.len();
    probabilities
        .iter()
        .map(|&p| {
            let h = (n - 1) as f64 * p;
            let h_floor = h.floor() as usize;
            let h_frac = h - h.floor();

            if h_floor >= n - 1 {
                sorted[n - 1]
            } else if h_frac == 0.0 {
                sorted[h_floor]
            } else {
                sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
            }
        })
        .collect()
}

/// Compute several quantiles, sorting a copy of `data` once.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn compute_quantiles(data: &[f64], probabilities: &[f64]) -> Vec<f64> {
    assert!(!data.is_empty(), "Cannot compute quantiles of empty slice");

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    compute_quantiles_sorted(&sorted, probabilities)
}
