//! Slowsort, the "multiply and surrender" joke algorithm.
//!
//! Its running time is not even polynomial. It is here for its recursion structure, not for use.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("slowsort_unstable", 50);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    slowsort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    slowsort(&mut TypedElements::new(v, compare));
}

pub fn slowsort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    slowsort_range(v, 0, len);
}

/// Sorts both halves of `start..start + len`, moves the larger of the two half maximums to the
/// end and then sorts everything but the last element again.
fn slowsort_range<E: Elements + ?Sized>(v: &mut E, start: usize, len: usize) {
    if len <= 1 {
        return;
    }

    let half = len / 2;
    slowsort_range(v, start, half);
    slowsort_range(v, start + half, len - half);

    let first_half_max = start + half - 1;
    let last = start + len - 1;
    if is_greater(v, first_half_max, last) {
        swap(v, first_half_max, last);
    }

    slowsort_range(v, start, len - 1);
}
