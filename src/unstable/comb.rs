//! Comb sort, bubble sort over pairs `gap` apart with a shrinking gap.

use std::cmp::Ordering;

use crate::compare::total_order_violation;
use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("comb_unstable");

/// The gap is divided by this factor after every pass.
pub const SHRINK_FACTOR: f64 = 1.3;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    comb_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    comb_sort(&mut TypedElements::new(v, compare));
}

/// Passes continue while the gap is larger than one, and at gap one until a pass finds nothing
/// to exchange.
///
/// At gap one every pass is a bubble sort pass, so a total order needs fewer than `len` of them
/// that still exchange something. Going past that panics instead of looping forever.
pub fn comb_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();

    let mut gap = len;
    let mut gap_one_passes = 0;

    loop {
        gap = next_gap(gap);

        let mut swapped = false;
        for i in 0..len.saturating_sub(gap) {
            if is_greater(v, i, i + gap) {
                swap(v, i, i + gap);
                swapped = true;
            }
        }

        if gap == 1 {
            if !swapped {
                return;
            }

            gap_one_passes += 1;
            if gap_one_passes > len {
                total_order_violation();
            }
        }
    }
}

/// Shrinks `gap` by [`SHRINK_FACTOR`], truncating, and never below one. Also well defined for
/// a gap of zero, which is what an empty input starts with.
#[inline]
pub fn next_gap(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR) as usize).max(1)
}
