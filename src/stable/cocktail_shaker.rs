//! Cocktail shaker sort, bubble sort that alternates direction.
//!
//! The forward pass carries the largest element of the window to its end, the backward pass the
//! smallest to its start. Both window bounds move to the position of the last exchange in their
//! direction.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("cocktail_shaker_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    cocktail_shaker_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail_shaker_sort(&mut TypedElements::new(v, compare));
}

pub fn cocktail_shaker_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut start = 0;
    let mut end = len - 1;

    while start < end {
        let mut last_swap = start;

        for i in start..end {
            if is_greater(v, i, i + 1) {
                swap(v, i, i + 1);
                last_swap = i;
            }
        }

        end = last_swap;

        // If the forward pass didn't swap, `last_swap == start` and the loop ends below.
        for i in ((start + 1)..=end).rev() {
            if is_greater(v, i - 1, i) {
                swap(v, i - 1, i);
                last_swap = i;
            }
        }

        start = last_swap;
    }
}
