//! Vector geometry and scalar median helpers.

use crate::error::ValidationError;

/// L1 distance: the sum over all coordinates of the absolute difference
/// between corresponding entries of `a` and `b`.
///
/// # Errors
///
/// Returns `ValidationError::DimensionMismatch` if the slices differ in
/// length.
pub fn l1_distance(a: &[f64], b: &[f64]) -> Result<f64, ValidationError> {
    if a.len() != b.len() {
        return Err(ValidationError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

/// Euclidean length of `v`.
#[must_use]
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Median of a non-empty slice: the middle element for odd counts, the mean
/// of the two middle elements for even counts.
///
/// # Panics
///
/// Panics if `values` is empty.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "median of an empty slice");

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Median of exactly three values, the bargaining engine's inner rule.
#[must_use]
pub fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
    let lo = a.min(b);
    let hi = a.max(b);
    lo.max(hi.min(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_distance_identity() {
        let v = [0.2, 0.3, 0.5];
        assert_eq!(l1_distance(&v, &v).unwrap(), 0.0);
    }

    #[test]
    fn test_l1_distance_symmetry() {
        let a = [0.1, 0.9];
        let b = [0.6, 0.4];
        assert_eq!(l1_distance(&a, &b).unwrap(), l1_distance(&b, &a).unwrap());
    }

    #[test]
    fn test_l1_distance_concrete_values() {
        assert_eq!(l1_distance(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 2.0);
        assert_eq!(l1_distance(&[0.5, 0.5], &[0.0, 1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_l1_distance_rejects_mismatched_lengths() {
        let err = l1_distance(&[1.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DimensionMismatch {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_l2_norm() {
        assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
        assert_eq!(l2_norm(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_even_count_averages_middles() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    #[should_panic(expected = "median of an empty slice")]
    fn test_median_empty_panics() {
        let _ = median(&[]);
    }

    #[test]
    fn test_median_of_three_all_orderings() {
        for (a, b, c) in [
            (1.0, 2.0, 3.0),
            (1.0, 3.0, 2.0),
            (2.0, 1.0, 3.0),
            (2.0, 3.0, 1.0),
            (3.0, 1.0, 2.0),
            (3.0, 2.0, 1.0),
        ] {
            assert_eq!(median_of_three(a, b, c), 2.0, "({a}, {b}, {c})");
        }
    }

    #[test]
    fn test_median_of_three_with_ties() {
        assert_eq!(median_of_three(2.0, 2.0, 1.0), 2.0);
        assert_eq!(median_of_three(1.0, 1.0, 1.0), 1.0);
        assert_eq!(median_of_three(-1.0, 0.0, -1.0), -1.0);
    }
}
