//! `QuickSelectAdaptive`: the single-target (or near-point window) adaptive quickselect
//! engine.
//!
//! The Floyd-Rivest sampling shape (pick a small positioned sample, recurse on it, expand
//! the resulting pivot out over the full range) narrows a large range in expected-linear
//! time without touching every element. The median-of-medians pivot used by the
//! `Adaption`/`Strict` modes is the classic group-of-5 construction, which trades a
//! constant-factor slowdown for a provable worst-case linear bound.

use crate::element::{eq, Element};
use crate::partition::{expand_partition, ternary_partition};
use crate::small_sort::{insertion_sort, lower_median4, sort3, sort4, upper_median4};

/// Above this range length, `FrSampling` mode replaces the deterministic step kernel with
/// an actual Floyd-Rivest sample-and-expand step.
pub(crate) const FR_SAMPLING_SIZE: usize = 1200;

/// Below this, both single- and multi-target engines finish with sort-select.
pub(crate) const LINEAR_SORTSELECT_SIZE: usize = 24;

/// Adaption-mode ladder, strictly increasing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum Mode {
    FrSampling,
    Sampling,
    Adaption,
    Strict,
}

impl Mode {
    fn escalate(self) -> Self {
        match self {
            Mode::FrSampling => Mode::Sampling,
            Mode::Sampling => Mode::Adaption,
            Mode::Adaption => Mode::Strict,
            Mode::Strict => Mode::Strict,
        }
    }
}

/// Which step kernel applies at a given `f = (ka - left) / (right - left)`.
enum StepKernel {
    FarLeft,
    Left,
    Middle,
    Right,
    FarRight,
}

impl StepKernel {
    fn classify(f: f64) -> Self {
        if f <= 1.0 / 12.0 {
            StepKernel::FarLeft
        } else if f <= 7.0 / 16.0 {
            StepKernel::Left
        } else if f < 9.0 / 16.0 {
            StepKernel::Middle
        } else if f < 11.0 / 12.0 {
            StepKernel::Right
        } else {
            StepKernel::FarRight
        }
    }
}

fn tile_pos(left: usize, right: usize, num: u64, denom: u64) -> usize {
    let n = (right - left) as u64;
    left + ((n * num) / denom) as usize
}

/// Three sample positions scattered near `tile`, clamped to `[left, right]`. Exact
/// placement only affects how representative the step kernel's pivot is, never
/// correctness.
fn spread_samples(tile: usize, left: usize, right: usize) -> [usize; 3] {
    let g = ((right - left) / 48).max(1);
    let a = if tile >= left + g {
        tile - g
    } else {
        (tile + g).min(right)
    };
    let b = if tile >= left + 2 * g {
        tile - 2 * g
    } else {
        (tile + 2 * g).min(right)
    };
    let c = if tile + g <= right {
        tile + g
    } else {
        tile.saturating_sub(g).max(left)
    };
    [a, b, c]
}

/// Runs the step kernel for `kernel`, leaving a representative pivot value at `tile` and
/// returning `tile`. Each kernel places one order statistic — min, lower median, median,
/// upper median, max of a handful of samples — at the tile position by passing `tile` as
/// the corresponding argument of the small-sort primitive.
fn step_kernel_pivot<T: Element>(a: &mut [T], left: usize, right: usize, kernel: StepKernel) -> usize {
    let tile = match kernel {
        StepKernel::FarLeft => tile_pos(left, right, 1, 12),
        StepKernel::Left => tile_pos(left, right, 5, 12),
        StepKernel::Middle => tile_pos(left, right, 5, 9),
        StepKernel::Right => tile_pos(left, right, 7, 12),
        StepKernel::FarRight => tile_pos(left, right, 11, 12),
    };
    let [s0, s1, s2] = spread_samples(tile, left, right);
    match kernel {
        StepKernel::FarLeft => sort4(a, tile, s0, s1, s2),
        StepKernel::Left => {
            lower_median4(a, s0, tile, s1, s2);
        }
        StepKernel::Middle => sort3(a, s0, tile, s1),
        StepKernel::Right => {
            upper_median4(a, s0, s1, tile, s2);
        }
        StepKernel::FarRight => sort4(a, s0, s1, s2, tile),
    }
    tile
}

/// Classic group-of-5 median-of-medians over `a[left..=right]`, returning the absolute
/// index holding the approximate median.
fn mom_index<T: Element>(a: &mut [T], left: usize, right: usize) -> usize {
    let n = right - left + 1;
    if n <= 5 {
        insertion_sort(a, left, right);
        return left + (n - 1) / 2;
    }
    let mut groups = 0usize;
    let mut i = left;
    while i <= right {
        let group_end = (i + 4).min(right);
        insertion_sort(a, i, group_end);
        let mid = i + (group_end - i) / 2;
        a.swap(left + groups, mid);
        groups += 1;
        i = group_end + 1;
    }
    mom_index(a, left, left + groups - 1)
}

/// `Adaption` mode narrows the median-of-medians window towards `ka` first (a pivot
/// adapted to the target); `Strict` mode always uses the full centred range (a pivot at
/// the sample centre, with no target-adaption).
fn median_of_medians_pivot<T: Element>(
    a: &mut [T],
    left: usize,
    right: usize,
    target: Option<usize>,
) -> usize {
    match target {
        None => mom_index(a, left, right),
        Some(ka) => {
            let n = right - left + 1;
            let half = (n / 2).max(5);
            let wr = (ka + half / 2).min(right);
            let wl = wr.saturating_sub(half - 1).max(left);
            mom_index(a, wl, wr)
        }
    }
}

fn sample_size(n: usize) -> usize {
    let f = (n as f64).powf(2.0 / 3.0);
    ((0.5 * f).ceil() as usize).clamp(1, n - 1)
}

fn sample_bias(n: usize, s: usize) -> i64 {
    let value = 0.5 * ((n as f64).ln() * (s as f64) * ((n - s) as f64) / (n as f64)).sqrt();
    value.round() as i64
}

/// Floyd-Rivest step: position a sample around `ka`, recursively select within it, then
/// grow the resulting pivot value's 3-way partition out to the full `[left, right]` range
/// via [`expand_partition`].
fn fr_sample_partition<T: Element>(a: &mut [T], left: usize, right: usize, ka: usize) -> (usize, usize) {
    let n = right - left + 1;
    let s = sample_size(n);
    let bias = sample_bias(n, s);
    let rel = (ka - left) as f64 / (n - 1).max(1) as f64;
    let max_start = (n - s) as i64;
    let ideal = (rel * max_start as f64).round() as i64;
    let nudge = if rel <= 0.5 { bias } else { -bias };
    let start = (ideal + nudge).clamp(0, max_start) as usize;
    let sample_left = left + start;
    let sample_right = sample_left + s - 1;

    let local_offset = (((ka - left) as f64 / n as f64) * s as f64).round() as usize;
    let local_target = (sample_left + local_offset).clamp(sample_left, sample_right);

    select_adaptive(a, sample_left, sample_right, local_target, local_target);
    let pivot_value = a[local_target];

    let (lt_end, gt_start) = expand_partition(&mut a[left..=right], pivot_value);
    (lt_end + left, gt_start - 1 + left)
}

fn estimate_margin(n: usize, f: f64) -> usize {
    let frac = if !(1.0 / 12.0..=11.0 / 12.0).contains(&f) {
        1.0 / 12.0
    } else if !(7.0 / 16.0..=9.0 / 16.0).contains(&f) {
        1.0 / 6.0
    } else {
        2.0 / 9.0
    };
    (n as f64 * frac) as usize
}

fn partition_around<T: Element>(a: &mut [T], left: usize, right: usize, pivot_abs: usize) -> (usize, usize) {
    let (lo, hi) = ternary_partition(&mut a[left..=right], pivot_abs - left);
    (lo + left, hi + left)
}

fn partition_step<T: Element>(
    a: &mut [T],
    left: usize,
    right: usize,
    ka: usize,
    f: f64,
    mode: Mode,
    n: usize,
) -> (usize, usize) {
    match mode {
        Mode::FrSampling if n > FR_SAMPLING_SIZE => fr_sample_partition(a, left, right, ka),
        Mode::FrSampling | Mode::Sampling => {
            let kernel = StepKernel::classify(f);
            let pivot = step_kernel_pivot(a, left, right, kernel);
            partition_around(a, left, right, pivot)
        }
        Mode::Adaption => {
            let pivot = median_of_medians_pivot(a, left, right, Some(ka));
            partition_around(a, left, right, pivot)
        }
        Mode::Strict => {
            let pivot = median_of_medians_pivot(a, left, right, None);
            partition_around(a, left, right, pivot)
        }
    }
}

/// Indices of the plateau of values equal to `a[ka]`/`a[kb]`, found by scanning outward
/// from an already-resolved window.
fn plateau_bounds<T: Element>(a: &[T], left: usize, right: usize, ka: usize, kb: usize) -> (usize, usize) {
    let mut p0 = ka;
    while p0 > left && eq(&a[p0 - 1], &a[ka]) {
        p0 -= 1;
    }
    let mut p1 = kb;
    while p1 < right && eq(&a[p1 + 1], &a[kb]) {
        p1 += 1;
    }
    (p0, p1)
}

/// `QuickSelectAdaptive`: narrows `[left, right]` until the window `[ka, kb]` (typically a
/// single point) holds its fully-sorted values, returning the plateau of equal values it
/// landed in.
pub(crate) fn select_adaptive<T: Element>(
    a: &mut [T],
    mut left: usize,
    mut right: usize,
    ka: usize,
    kb: usize,
) -> (usize, usize) {
    debug_assert!(left <= ka && ka <= kb && kb <= right);
    let mut mode = Mode::FrSampling;
    loop {
        if left >= right {
            return (left, right);
        }
        if (kb - left).min(right - ka) < LINEAR_SORTSELECT_SIZE {
            crate::small_sort::sort_select(a, left, right, ka, kb);
            return plateau_bounds(a, left, right, ka, kb);
        }

        let n = right - left + 1;
        let f = (ka - left) as f64 / (right - left) as f64;
        let before = right - left;

        let (p0, p1) = partition_step(a, left, right, ka, f, mode, n);

        if kb < p0 {
            right = p0 - 1;
        } else if ka > p1 {
            left = p1 + 1;
        } else if ka >= p0 && kb <= p1 {
            return (p0, p1);
        } else {
            crate::small_sort::sort_select(a, left, right, ka, kb);
            return plateau_bounds(a, left, right, ka, kb);
        }

        let after = right - left;
        let shrink = before.saturating_sub(after);
        if shrink < estimate_margin(n, f) {
            mode = mode.escalate();
        }
    }
}
