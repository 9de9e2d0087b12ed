//! Ergonomic order-statistic wrappers over [`crate::select_one`]/[`crate::select_many`].
//!
//! These are thin convenience entry points over the index-returning core — most callers
//! want "the median" or "the 99th percentile", not to manage `left`/`right`/`k`
//! bookkeeping themselves.

use crate::element::Element;
use crate::{select_many, select_one};

/// The median value of `a`, placed at its sorted position.
///
/// For an odd-length slice this is the single middle value. For an even-length slice
/// this returns the lower of the two middle values; use [`median_pair`] to get both
/// (e.g. to average them for a numeric midpoint).
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn median<T: Element>(a: &mut [T]) -> T {
    assert!(!a.is_empty(), "median of an empty slice");
    let mid = (a.len() - 1) / 2;
    select_one(a, 0, a.len() - 1, mid);
    a[mid]
}

/// The two middle values of `a`, placed at their sorted positions.
///
/// For an odd-length slice both entries are the same (single) middle value.
///
/// # Panics
///
/// Panics if `a` is empty.
pub fn median_pair<T: Element>(a: &mut [T]) -> (T, T) {
    assert!(!a.is_empty(), "median_pair of an empty slice");
    let lo = (a.len() - 1) / 2;
    let hi = a.len() / 2;
    if lo == hi {
        select_one(a, 0, a.len() - 1, lo);
        (a[lo], a[lo])
    } else {
        let mut ks = [lo, hi];
        select_many(a, 0, a.len() - 1, &mut ks);
        (a[lo], a[hi])
    }
}

/// The value at quantile `q` (`0.0..=1.0`) of `a`, placed at its sorted position.
///
/// The target index is `round(q * (a.len() - 1))`, the nearest-rank convention.
///
/// # Panics
///
/// Panics if `a` is empty or `q` is outside `[0.0, 1.0]`.
pub fn quantile<T: Element>(a: &mut [T], q: f64) -> T {
    assert!(!a.is_empty(), "quantile of an empty slice");
    assert!((0.0..=1.0).contains(&q), "quantile out of range: {q}");
    let idx = quantile_index(a.len(), q);
    select_one(a, 0, a.len() - 1, idx);
    a[idx]
}

/// The values at each quantile in `qs`, placed at their sorted positions, returned in the
/// same order as `qs`. All targets share the partitioning work done along the way.
///
/// # Panics
///
/// Panics if `a` is empty, `qs` is empty, or any entry of `qs` is outside `[0.0, 1.0]`.
pub fn quantiles<T: Element>(a: &mut [T], qs: &[f64]) -> Vec<T> {
    assert!(!a.is_empty(), "quantiles of an empty slice");
    assert!(!qs.is_empty(), "quantiles called with no quantiles requested");
    assert!(
        qs.iter().all(|&q| (0.0..=1.0).contains(&q)),
        "quantile out of range in {qs:?}"
    );
    let mut idxs: Vec<usize> = qs.iter().map(|&q| quantile_index(a.len(), q)).collect();
    select_many(a, 0, a.len() - 1, &mut idxs);
    idxs.iter().map(|&i| a[i]).collect()
}

fn quantile_index(len: usize, q: f64) -> usize {
    ((len - 1) as f64 * q).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn median_odd_length() {
        let mut a = [5, 3, 1, 4, 2];
        assert_eq!(median(&mut a), 3);
    }

    #[test]
    fn median_pair_even_length() {
        let mut a = [4, 1, 3, 2];
        let (lo, hi) = median_pair(&mut a);
        assert_eq!((lo, hi), (2, 3));
    }

    #[test]
    fn quantile_endpoints_are_min_and_max() {
        let mut a = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
        assert_eq!(quantile(&mut a, 0.0), 0);
        let mut a = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
        assert_eq!(quantile(&mut a, 1.0), 9);
    }

    #[test]
    fn quantiles_matches_individual_quantile_calls() {
        let mut rng = StdRng::seed_from_u64(9);
        let template: Vec<i32> = (0..200).map(|_| rng.random_range(-500..500)).collect();
        let qs = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];

        let mut a = template.clone();
        let batched = quantiles(&mut a, &qs);

        let singles: Vec<i32> = qs
            .iter()
            .map(|&q| {
                let mut b = template.clone();
                quantile(&mut b, q)
            })
            .collect();

        assert_eq!(batched, singles);
    }

    #[test]
    fn median_matches_sorted_reference() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..50 {
            let n = rng.random_range(1..100);
            let a: Vec<i32> = (0..n).map(|_| rng.random_range(-1000..1000)).collect();
            let mut sorted = a.clone();
            sorted.sort();

            let mut buf = a.clone();
            let m = median(&mut buf);
            assert_eq!(m, sorted[(n as usize - 1) / 2]);
        }
    }
}
