//! Selection sort.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("selection_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(&mut TypedElements::new(v, compare));
}

/// Moves the minimum of the unsorted suffix to its front, `len - 1` times.
///
/// Always performs exactly `len - 1` swaps, some of them possibly of an element with itself.
pub fn selection_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();

    for start in 0..len.saturating_sub(1) {
        // The first of several equal minimums wins.
        let mut min = start;
        for i in (start + 1)..len {
            if is_greater(v, min, i) {
                min = i;
            }
        }

        swap(v, start, min);
    }
}
