//! Insertion sort by successive neighbour swaps.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(&mut TypedElements::new(v, compare));
}

/// Grows a sorted prefix by one element per step, moving the new tail element left until its
/// predecessor is not greater.
pub fn insertion_sort<E: Elements + ?Sized>(v: &mut E) {
    for tail in 1..v.len() {
        insert_tail(v, tail);
    }
}

/// Assumes `0..tail` is sorted and extends that to `0..=tail`.
fn insert_tail<E: Elements + ?Sized>(v: &mut E, tail: usize) {
    let mut i = tail;
    while i > 0 {
        if !is_greater(v, i - 1, i) {
            break;
        }

        swap(v, i - 1, i);
        i -= 1;
    }
}
