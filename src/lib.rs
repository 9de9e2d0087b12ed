//! # introselect
//!
//! `introselect` reorders a slice in place so that a caller-chosen set of index
//! positions hold the values they would hold in the fully sorted slice — without paying
//! for a full sort. It is an introspective, multi-target quickselect: a single-target
//! adaptive engine (Floyd–Rivest sampling, falling back through median-of-medians) for
//! one index at a time, and a dual-pivot introselect engine that shares partitioning work
//! across many targets at once, bounded by a recursion budget that falls back to
//! heap-select if the input is adversarial.
//!
//! ## Key Features
//!
//! - **No full sort**: only the requested positions (and the partitioning needed to
//!   place them) are touched; everything else is merely partitioned around them.
//! - **Adaptive pivoting**: small ranges use insertion/heap selection, mid-size ranges
//!   use median-of-medians, large ranges use Floyd–Rivest sampling, tuned by how close
//!   the target sits to either end of the range.
//! - **Multi-target sharing**: [`select_many`] deduplicates and indexes the requested
//!   positions once (sorted-key or bitset back-end, chosen by density), then reuses every
//!   dual-pivot partition across however many targets fall in each resulting region.
//! - **Worst-case safety**: a packed recursion budget falls back to heap-select if a
//!   pathological input (e.g. a median-of-3-killer pattern) would otherwise blow the
//!   recursion depth.
//!
//! ## Usage
//!
//! ```rust
//! use introselect::select_one;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
//! select_one(&mut data, 0, 9, 4);
//! assert_eq!(data[4], 4); // the 5th-smallest value, in its final sorted position
//! ```
//!
//! Resolving several positions at once reuses partitioning work between them:
//!
//! ```rust
//! use introselect::select_many;
//!
//! let mut data: Vec<f64> = vec![9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0, 0.0];
//! let mut targets = [0usize, 4, 9];
//! select_many(&mut data, 0, 9, &mut targets);
//! assert_eq!(data[0], 0.0);
//! assert_eq!(data[9], 9.0);
//! ```
//!
//! ## Scope
//!
//! This crate operates purely on slices of `f64`/`i32` and assumes a caller contract of
//! no `NaN` values and no signed-zero distinction for `f64` (see [`Element`]); it does not
//! sort, does not guarantee stability, and is not safe to share across threads for a
//! single in-flight call (each call takes `&mut [T]`, which Rust's borrow checker already
//! enforces).

mod element;
mod interval;
mod multi;
mod partition;
mod single;
mod small_sort;
mod stats;

pub use element::Element;
pub use multi::SignedCount;
pub use stats::{median, median_pair, quantile, quantiles};

/// Reorders `a[left..=right]` so that `a[k]` holds the value it would hold at position
/// `k` in `sort(a[left..=right])`.
///
/// # Preconditions
///
/// `left <= k`, `k <= right`, and `right < a.len()`. For `f64`, no element in
/// `a[left..=right]` may be `NaN`. Violating the index bounds above is a programmer error
/// and panics immediately; everything below this boundary trusts the caller and checks
/// with `debug_assert!` instead, matching the rest of this crate's panic-on-misuse style.
///
/// # Examples
///
/// ```rust
/// use introselect::select_one;
///
/// let mut data = [5, 3, 8, 1, 9];
/// select_one(&mut data, 0, 4, 0);
/// assert_eq!(data[0], 1); // the minimum
/// ```
pub fn select_one<T: Element>(a: &mut [T], left: usize, right: usize, k: usize) {
    assert!(right < a.len(), "select_one: right ({right}) out of range for a slice of len {}", a.len());
    assert!(left <= k && k <= right, "select_one: k ({k}) out of range [{left}, {right}]");
    if left >= right {
        return;
    }
    single::select_adaptive(a, left, right, k, k);
}

/// Reorders `a[left..=right]` so that every index in `ks` holds the value it would hold
/// in `sort(a[left..=right])`.
///
/// Duplicate indices in `ks` are harmless: the position is simply resolved once. Returns
/// the number of distinct indices actually used, negated if the sorted-key back-end
/// happened to leave `ks` sorted in place as a side effect of deduplicating it (see
/// [`SignedCount`]).
///
/// # Preconditions
///
/// `right < a.len()` and every `ks[i]` is within `[left, right]`. For `f64`, no element
/// in `a[left..=right]` may be `NaN`.
///
/// # Examples
///
/// ```rust
/// use introselect::select_many;
///
/// let mut data = [5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
/// let mut targets = [2usize, 5, 8];
/// select_many(&mut data, 0, 9, &mut targets);
///
/// let mut sorted = data;
/// sorted.sort();
/// assert_eq!(data[2], sorted[2]);
/// assert_eq!(data[5], sorted[5]);
/// assert_eq!(data[8], sorted[8]);
/// ```
pub fn select_many<T: Element>(a: &mut [T], left: usize, right: usize, ks: &mut [usize]) -> SignedCount {
    assert!(right < a.len(), "select_many: right ({right}) out of range for a slice of len {}", a.len());
    assert!(
        ks.iter().all(|&k| left <= k && k <= right),
        "select_many: an index in ks is out of range [{left}, {right}]"
    );
    if left >= right {
        return SignedCount(ks.len().min(1) as i64);
    }
    multi::select_many(a, left, right, ks)
}

/// Commonly used entry points, for glob-importing.
pub mod prelude {
    pub use crate::{median, median_pair, quantile, quantiles, select_many, select_one, Element, SignedCount};
}
