//! `select_many`: the dual-pivot multi-target introselect engine.
//!
//! Five sample positions pick two pivots, one partition splits the range into five
//! regions against both of them, and the multi-target engine recurses into whichever
//! regions still hold outstanding targets — at most one genuine recursive call per level,
//! with everything else handled by tail-looping within the current frame, so recursion
//! depth stays bounded regardless of how many targets are requested.

use crate::element::{eq, Element};
use crate::interval::{create_updating_interval, region_has_target, Interval, UpdatingInterval};
use crate::partition::{dual_pivot_partition, ternary_partition, SamplePositions};
use crate::small_sort::{heap_select_one, sort5, sort_select};
use crate::single::select_adaptive;

/// Below this gap between the extreme outstanding indices, the multi-target engine
/// delegates straight to the single-target engine.
pub(crate) const DP_SORTSELECT_SIZE: usize = 20;

const DEPTH_STEP: i32 = 1 << 20;
const THRESHOLD_BITS: u32 = 20;
const THRESHOLD_MASK: i32 = (1 << THRESHOLD_BITS) - 1;
const MAX_COUNTER_FIELD: i32 = i32::MAX >> THRESHOLD_BITS;

/// Packed recursion budget: depth counter in the high bits, sort-select threshold in the
/// low bits, in one machine word.
///
/// The counter starts below zero (by `max_depth` units) and is incremented by
/// [`DEPTH_STEP`] on every dual-pivot partition; once it reaches zero the packed value is
/// non-negative and [`Budget::exhausted`] reports so with a single sign check.
#[derive(Clone, Copy)]
struct Budget(i32);

impl Budget {
    fn new(n: usize, ka: usize, kb: usize) -> Self {
        let threshold: i32 = if kb - ka < 3 * DP_SORTSELECT_SIZE {
            0
        } else {
            (2 * DP_SORTSELECT_SIZE) as i32
        };
        let max_depth = max_depth_heuristic(n).max(1);
        let initial_counter = (MAX_COUNTER_FIELD - max_depth).max(0);
        Budget((initial_counter << THRESHOLD_BITS) | threshold)
    }

    fn threshold(self) -> usize {
        (self.0 & THRESHOLD_MASK) as usize
    }

    fn exhausted(self) -> bool {
        self.0 < 0
    }

    fn next_level(self) -> Self {
        Budget(self.0.wrapping_add(DEPTH_STEP))
    }
}

/// `((bits - clz(n)) * 323) >> 8`, a 1.25x-of-log2(n) approximation scaled to
/// `usize::BITS` so it stays correct on 32- and 64-bit targets alike.
fn max_depth_heuristic(n: usize) -> i32 {
    if n == 0 {
        return 0;
    }
    let bits = (usize::BITS - n.leading_zeros()) as i64;
    ((bits * 323) >> 8) as i32
}

/// Picks five sample positions spread across `[left, right]` (spacing ~`n/7`), sorts
/// them, and uses the 2nd and 4th as the two pivots — then locates each pivot's
/// equal-range via [`ternary_partition`] and hands both off to
/// [`dual_pivot_partition`].
///
/// Returns `(p0, p1, p2, p3)` as a closed/open/closed pivot-region quadruple:
/// `[p0, p1]` equal the smaller pivot, `(p1, p2)` lies strictly between the two pivots,
/// `[p2, p3]` equal the larger pivot — the convention [`run`]'s region bookkeeping is
/// written against. [`dual_pivot_partition`] itself returns the tighter `(a, b, c, d)`
/// half-open/closed mix documented on that function, one off from this quadruple at the
/// inner boundary (its `b` is one past the equal-small range, its `c` one before the
/// equal-large range), so the two interior fields are shifted by one here before
/// returning.
fn choose_and_partition<T: Element>(a: &mut [T], left: usize, right: usize) -> (usize, usize, usize, usize) {
    let n = right - left;
    let step = (1 + n / 8 + n / 64).max(1);
    let mid = left + n / 2;
    let samples = SamplePositions {
        data: [
            mid.saturating_sub(2 * step).max(left),
            mid.saturating_sub(step).clamp(left, right),
            mid.clamp(left, right),
            (mid + step).min(right),
            (mid + 2 * step).min(right),
        ],
    };
    let [s0, s1, s2, s3, s4] = samples.data;

    sort5(a, s0, s1, s2, s3, s4);
    let lower_value = a[s1];
    let upper_value = a[s3];

    let (u_a, u_d) = {
        let (lo, hi) = ternary_partition(&mut a[left..=right], s1 - left);
        (lo + left, hi + left)
    };

    if eq(&lower_value, &upper_value) {
        // Coincident pivots: p1 = p3 and p2 = p0 collapses the (p1, p2) between-region
        // to empty, leaving a single combined equal-pivot range.
        return (u_a, u_d, u_a, u_d);
    }

    let upper_local = (u_d + 1..=right)
        .find(|&i| eq(&a[i], &upper_value))
        .expect("dual-pivot: upper sample value vanished during lower partition");
    let (v_a, v_d) = {
        let (lo, hi) = ternary_partition(&mut a[u_d + 1..=right], upper_local - (u_d + 1));
        (lo + u_d + 1, hi + u_d + 1)
    };

    let (a_idx, b_idx, c_idx, d_idx) = dual_pivot_partition(
        &mut a[left..=right],
        u_a - left,
        u_d - left,
        v_a - left,
        v_d - left,
    );
    (a_idx + left, (b_idx - 1) + left, (c_idx + 1) + left, d_idx + left)
}

/// Runs the dual-pivot introselect loop over `[left, right]` against `interval`'s
/// outstanding indices, tail-recursing within a single stack frame wherever possible and
/// making at most one genuine recursive call per level.
///
/// `budget` is threaded through every recursive call rather than rebuilt from the
/// sub-range: the packed recursion-depth counter is sized once, against the original
/// top-level range, so an adversarial input can't re-arm a fresh depth allowance at every
/// nesting level and blow the real call stack.
fn run<T: Element, I: Interval>(
    a: &mut [T],
    mut left: usize,
    mut right: usize,
    mut interval: I,
    mut budget: Budget,
) {
    loop {
        let ka = interval.left();
        let kb = interval.right();

        if (kb - left).min(right - ka) < DP_SORTSELECT_SIZE || (right - left) < budget.threshold() {
            sort_select(a, left, right, ka, kb);
            return;
        }
        if kb - ka < DP_SORTSELECT_SIZE {
            select_adaptive(a, left, right, ka, kb);
            return;
        }
        if budget.exhausted() {
            let mut cursor = Some(ka);
            while let Some(k) = cursor {
                heap_select_one(a, left, right, k);
                cursor = if k < kb { interval.first_ge(k + 1) } else { None };
            }
            return;
        }

        let (p0, p1, p2, p3) = choose_and_partition(a, left, right);
        budget = budget.next_level();

        let r1_nonempty = p0 > left && region_has_target(&interval, left, p0 - 1);
        let r2_nonempty = p2 > p1 + 1 && region_has_target(&interval, p1 + 1, p2 - 1);
        let r3_nonempty = p3 < right && region_has_target(&interval, p3 + 1, right);

        if !r1_nonempty && !r2_nonempty && !r3_nonempty {
            return;
        }

        if r1_nonempty {
            if kb < p0 {
                right = p0 - 1;
                continue;
            }
            if kb <= p1 {
                interval.update_right(p0 - 1);
                run(a, left, p0 - 1, interval, budget);
                return;
            }
            let lower = interval.split_left(p0, p1);
            run(a, left, p0 - 1, lower, budget);
            left = p1 + 1;
            continue;
        }

        // r1 is empty, so interval.left() >= p0: any outstanding index at or before p1
        // sits inside the pivot-equal plateau and is already resolved. Advance the
        // interval past it, the same bookkeeping the split branch above gets for free.
        if interval.right() <= p1 {
            return;
        }
        if interval.left() <= p1 {
            interval.update_left(p1 + 1);
        }
        left = p1 + 1;
        let kb = interval.right();

        if r2_nonempty {
            if kb < p2 {
                right = p2 - 1;
                continue;
            }
            if kb <= p3 {
                interval.update_right(p2 - 1);
                run(a, p1 + 1, p2 - 1, interval, budget);
                return;
            }
            let lower = interval.split_left(p2, p3);
            run(a, p1 + 1, p2 - 1, lower, budget);
            left = p3 + 1;
            continue;
        }

        // r2 is empty too: the symmetric fix for the upper-pivot plateau.
        if interval.right() <= p3 {
            return;
        }
        if interval.left() <= p3 {
            interval.update_left(p3 + 1);
        }
        left = p3 + 1;
    }
}

fn dispatch<T: Element, I: Interval>(a: &mut [T], left: usize, right: usize, interval: I) {
    let ka = interval.left();
    let kb = interval.right();
    if kb - ka < DP_SORTSELECT_SIZE {
        select_adaptive(a, left, right, ka, kb);
    } else {
        let budget = Budget::new(right - left + 1, ka, kb);
        run(a, left, right, interval, budget);
    }
}

/// Number of distinct indices actually used, negative when `ks` was sorted in place by
/// the sorted-key back-end's deduplication step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedCount(pub i64);

/// `select_many`: reorders `a[left..=right]` so every index in `ks` holds the value it
/// would hold in `sort(a[left..=right])`.
pub(crate) fn select_many<T: Element>(a: &mut [T], left: usize, right: usize, ks: &mut [usize]) -> SignedCount {
    if ks.is_empty() {
        return SignedCount(0);
    }
    debug_assert!(ks.iter().all(|&k| left <= k && k <= right));

    let dedup = create_updating_interval(ks);
    let distinct = dedup.distinct_count as i64;
    let signed = if dedup.sorted_in_place { -distinct } else { distinct };

    match dedup.interval {
        UpdatingInterval::Point(p) => {
            let ka = p.left();
            select_adaptive(a, left, right, ka, ka);
        }
        UpdatingInterval::SortedKey(iv) => dispatch(a, left, right, iv),
        UpdatingInterval::Bitset(iv) => dispatch(a, left, right, iv),
    }

    SignedCount(signed)
}
