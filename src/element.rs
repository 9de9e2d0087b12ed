//! The element abstraction the selection engine is generic over.
//!
//! A narrow trait lets the engine be written once and monomorphised per concrete type,
//! instead of duplicating the algorithm per primitive.

/// A value the selection engine can reorder.
///
/// `Element` requires only `Copy` and a `<` total order (via `PartialOrd`); callers are
/// responsible for keeping `f64` inputs free of NaN (signed zeros compare equal) before
/// calling [`crate::select_one`] or [`crate::select_many`]. The engine itself never
/// special-cases NaN.
pub trait Element: Copy + PartialOrd {}

impl Element for f64 {}
impl Element for i32 {}

/// Strict less-than, the only relation the engine relies on.
#[inline(always)]
pub(crate) fn lt<T: Element>(a: &T, b: &T) -> bool {
    *a < *b
}

/// Value equality under `==`; for `f64` this is exactly `PartialEq`. NaN never reaches
/// here under the caller's contract.
#[inline(always)]
pub(crate) fn eq<T: Element>(a: &T, b: &T) -> bool {
    !(lt(a, b) || lt(b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lt_and_eq_agree_with_partial_ord() {
        assert!(lt(&1.0_f64, &2.0_f64));
        assert!(!lt(&2.0_f64, &1.0_f64));
        assert!(eq(&3_i32, &3_i32));
        assert!(!eq(&3_i32, &4_i32));
    }
}
