//! Shared partition primitives used by both the single-target and multi-target engines.
//!
//! `ternary_partition` partitions around one pivot into three regions (less, equal,
//! greater); `dual_pivot_partition` generalizes that to two pivots and five regions, with
//! a swap-parts cleanup pass that collapses the scan's interleaved inversions down to a
//! clean, minimal set of region boundaries in one pass. `expand_partition` is the simpler
//! Dutch-national-flag/Bentley-McIlroy three-way scan used to grow a Floyd-Rivest
//! sample's pivot value out over the full range.

use crate::element::{eq, lt, Element};
use cuneiform::cuneiform;

/// The five sample positions the multi-target engine's dual-pivot selection step reads
/// (and re-reads, once per pivot candidate) while narrowing down to the 2nd/4th order
/// statistics. Cache-aligned so the tight array that's read repeatedly in a hot loop sits
/// in one cache line.
#[cuneiform]
pub(crate) struct SamplePositions {
    pub(crate) data: [usize; 5],
}

/// Swaps the `count`-element subslice starting at `left` with the equal-length subslice
/// ending at `right`.
fn swap_parts<T: Element>(data: &mut [T], left: usize, right: usize, count: usize) {
    if count == 0 {
        return;
    }
    let inner = &mut data[left..=right];
    let (head, tail) = inner.split_at_mut(count);
    let mid = tail.len() - count;
    let tail = &mut tail[mid..];
    head.swap_with_slice(tail);
}

/// Three-way partition of `data` around the value at `index`. Returns `(a, d)`: elements
/// `..a` are less than the pivot, `a..=d` equal it, `d+1..` are greater.
pub(crate) fn ternary_partition<T: Element>(data: &mut [T], index: usize) -> (usize, usize) {
    if data.len() == 1 {
        debug_assert_eq!(index, 0);
        return (0, 0);
    }
    data.swap(0, index);
    let mut v = 0usize;
    let (mut l, mut r) = (0usize, data.len() - 1);
    let (mut p, mut q) = (1usize, r - 1);
    let (mut i, mut j) = (l, r);

    if lt(&data[v], &data[r]) {
        r = q;
    } else if lt(&data[r], &data[v]) {
        data.swap(l, r);
        l = p;
        v = r;
    }

    loop {
        i += 1;
        j -= 1;
        while lt(&data[i], &data[v]) {
            i += 1;
        }
        while lt(&data[v], &data[j]) {
            j -= 1;
        }
        if i < j {
            data.swap(i, j);
            if eq(&data[i], &data[v]) {
                data.swap(p, i);
                p += 1;
            }
            if eq(&data[j], &data[v]) {
                data.swap(q, j);
                q -= 1;
            }
        } else if i > j {
            break;
        } else {
            i += 1;
            j -= 1;
            break;
        }
    }

    swap_parts(data, l, j, (p - l).min(j + 1 - p));
    swap_parts(data, i, r, (r - q).min(q + 1 - i));

    let a = l + j + 1 - p;
    let d = i + r - q - 1;
    (a, d)
}

/// Partitions `data` into five regions using the elements at `u` and `v` as the two
/// pivots (`u`-pivot `<=` `v`-pivot, both given as `(a, d)` equal-ranges from a prior
/// [`ternary_partition`] call locating each one). Returns `(a, b, c, d)`:
///
/// ```text
/// ..a        < data[a]
/// a..b       == data[a]
/// b..=c      strictly between the two pivots
/// c+1..=d    == data[d]
/// d+1..      > data[d]
/// ```
pub(crate) fn dual_pivot_partition<T: Element>(
    data: &mut [T],
    u_a: usize,
    u_d: usize,
    v_a: usize,
    v_d: usize,
) -> (usize, usize, usize, usize) {
    if eq(&data[u_a], &data[v_a]) {
        let (a, d) = ternary_partition(data, u_d);
        return (a, d + 1, d, d);
    }

    let s = u_a;
    let e = v_d;
    let mut l = u_d + 1;
    let mut p = l;
    let mut q = v_a - 1;
    let mut i = p - 1;
    let mut j = q + 1;

    loop {
        loop {
            i += 1;
            if !lt(&data[i], &data[e]) {
                break;
            }
            if lt(&data[i], &data[s]) {
                continue;
            } else if lt(&data[s], &data[i]) {
                data.swap(p, i);
            } else {
                data.swap(p, i);
                data.swap(l, p);
                l += 1;
            }
            p += 1;
        }
        loop {
            j -= 1;
            if lt(&data[e], &data[j]) {
                continue;
            } else if lt(&data[j], &data[e]) {
                break;
            } else {
                data.swap(j, q);
                q -= 1;
            }
        }
        if i < j {
            data.swap(i, j);
            if lt(&data[s], &data[i]) {
                data.swap(p, i);
                p += 1;
            } else if eq(&data[i], &data[s]) {
                data.swap(i, p);
                data.swap(l, p);
                l += 1;
                p += 1;
            }
            if eq(&data[j], &data[e]) {
                data.swap(j, q);
                q -= 1;
            }
        } else {
            break;
        }
    }

    let a = s + i - p;
    let b = a + l - s;
    let d = e + j - q;
    let c = d + q - e;

    swap_parts(data, l, j, (j + 1 - p).min(p - l));
    swap_parts(data, s, b - 1, (l - s).min(j + 1 - p));
    swap_parts(data, i, e, (q + 1 - i).min(e - q));

    (a, b, c, d)
}

/// Bentley-McIlroy-style single-pass three-way (Dutch national flag) partition by an
/// explicit pivot value, used to expand a Floyd-Rivest sample's chosen pivot out over the
/// full working range. Returns `(lt_end, gt_start)`: `..lt_end` is less than `pivot`,
/// `lt_end..gt_start` equals it, `gt_start..` is greater.
pub(crate) fn expand_partition<T: Element>(data: &mut [T], pivot: T) -> (usize, usize) {
    let mut lo = 0usize;
    let mut i = 0usize;
    let mut hi = data.len();
    while i < hi {
        if lt(&data[i], &pivot) {
            data.swap(lo, i);
            lo += 1;
            i += 1;
        } else if lt(&pivot, &data[i]) {
            hi -= 1;
            data.swap(i, hi);
        } else {
            i += 1;
        }
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_ternary_partitioned(data: &[i32], a: usize, d: usize) {
        let pivot = data[a];
        for (k, &x) in data.iter().enumerate() {
            if k < a {
                assert!(x < pivot, "index {k} should be < pivot");
            } else if k <= d {
                assert_eq!(x, pivot, "index {k} should equal pivot");
            } else {
                assert!(x > pivot, "index {k} should be > pivot");
            }
        }
    }

    #[test]
    fn ternary_partition_fuzz() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = rng.random_range(1..80);
            let mut data: Vec<i32> = (0..n).map(|_| rng.random_range(-5..5)).collect();
            let index = rng.random_range(0..n as usize);
            let (a, d) = ternary_partition(&mut data, index);
            assert_ternary_partitioned(&data, a, d);
        }
    }

    #[test]
    fn dual_pivot_partition_fuzz() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let n = rng.random_range(10..100);
            let mut data: Vec<i32> = (0..n).map(|_| rng.random_range(-10..10)).collect();
            data.sort_unstable();
            let lo_val = data[n / 4];
            let hi_val = data[3 * n / 4];
            if lo_val == hi_val {
                continue;
            }
            // Reshuffle, then locate the two pivot ranges via ternary_partition first.
            use rand::seq::SliceRandom;
            data.shuffle(&mut rng);
            let lo_idx = data.iter().position(|&x| x == lo_val).unwrap();
            let (u_a, u_d) = ternary_partition(&mut data, lo_idx);
            let hi_idx = (u_d + 1..data.len())
                .find(|&i| data[i] == hi_val)
                .unwrap();
            let (v_a, v_d) = ternary_partition(&mut data[u_d + 1..], hi_idx - (u_d + 1));
            let v_a = v_a + u_d + 1;
            let v_d = v_d + u_d + 1;

            let (a, b, c, d) = dual_pivot_partition(&mut data, u_a, u_d, v_a, v_d);
            let low = data[a];
            let high = data[d];
            assert!(low < high);
            for (k, &x) in data.iter().enumerate() {
                if k < a {
                    assert!(x < low);
                } else if k < b {
                    assert_eq!(x, low);
                } else if k <= c {
                    assert!(x > low && x < high);
                } else if k <= d {
                    assert_eq!(x, high);
                } else {
                    assert!(x > high);
                }
            }
        }
    }

    #[test]
    fn expand_partition_fuzz() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let n = rng.random_range(1..80);
            let mut data: Vec<i32> = (0..n).map(|_| rng.random_range(-5..5)).collect();
            let pivot = rng.random_range(-5..5);
            let (lt_end, gt_start) = expand_partition(&mut data, pivot);
            for &x in &data[..lt_end] {
                assert!(x < pivot);
            }
            for &x in &data[lt_end..gt_start] {
                assert_eq!(x, pivot);
            }
            for &x in &data[gt_start..] {
                assert!(x > pivot);
            }
        }
    }
}
