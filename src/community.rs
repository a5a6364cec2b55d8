//! Pairwise matrices derived from one simulated community.

use nalgebra::{DMatrix, DVector};

use crate::types::{DistanceMatrix, Vector2, WeightMatrix};

/// Relative abundances `n_i / Σn`.
///
/// An all-zero community yields NaN entries.
pub fn relative_abundances(counts: &[u64]) -> DVector<f64> {
    let n = DVector::from_iterator(counts.len(), counts.iter().map(|&c| c as f64));
    let total = n.sum();
    n / total
}

/// Pairwise abundance weights `pij = n_i n_j / (Σn)²`.
pub fn abundance_weights(counts: &[u64]) -> WeightMatrix {
    let p = relative_abundances(counts);
    &p * p.transpose()
}

/// Euclidean distances between every pair of attribute points.
pub fn pairwise_distances(points: &[Vector2]) -> DistanceMatrix {
    let s = points.len();
    let mut d = DMatrix::zeros(s, s);
    for i in 0..s {
        for j in (i + 1)..s {
            let dist = (points[i] - points[j]).norm();
            d[(i, j)] = dist;
            d[(j, i)] = dist;
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_abundances_sum_to_one() {
        let p = relative_abundances(&[1, 3, 6]);
        assert!((p.sum() - 1.0).abs() < 1e-12);
        assert!((p[2] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_weights_properties() {
        let w = abundance_weights(&[5, 1, 12, 2]);
        assert_eq!(w.shape(), (4, 4));
        assert!((w.sum() - 1.0).abs() < 1e-12);
        assert!(w.iter().all(|&x| x >= 0.0));
        assert!((&w - w.transpose()).norm() < 1e-15);
    }

    #[test]
    fn test_equal_counts_give_uniform_weights() {
        let w = abundance_weights(&[1, 1]);
        assert!(w.iter().all(|&x| (x - 0.25).abs() < 1e-15));
    }

    #[test]
    fn test_distances_properties() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 4.0),
            Vector2::new(-1.0, 0.0),
        ];
        let d = pairwise_distances(&points);
        assert_eq!(d.shape(), (3, 3));
        for i in 0..3 {
            assert_eq!(d[(i, i)], 0.0);
        }
        assert!((d[(0, 1)] - 5.0).abs() < 1e-12);
        assert!((d[(0, 2)] - 1.0).abs() < 1e-12);
        assert_eq!(d, d.transpose());
    }

    #[test]
    fn test_all_zero_counts_are_nan() {
        let w = abundance_weights(&[0, 0, 0]);
        assert!(w.iter().all(|x| x.is_nan()));
    }
}
