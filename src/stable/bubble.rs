//! Bubble sort that remembers where the last exchange happened.
//!
//! Everything past the last exchange of a pass is already in its final position, so the next
//! pass stops there. Sorted input takes a single pass.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("bubble_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(&mut TypedElements::new(v, compare));
}

pub fn bubble_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    if len < 2 {
        return;
    }

    // Last index of the unsorted prefix.
    let mut end = len - 1;
    while end > 0 {
        let mut last_swap = 0;

        for i in 0..end {
            if is_greater(v, i, i + 1) {
                swap(v, i, i + 1);
                last_swap = i;
            }
        }

        end = last_swap;
    }
}
