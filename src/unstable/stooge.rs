//! Stooge sort.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

// O(n^2.71), anything larger takes too long in the generic tests.
sort_impl!("stooge_unstable", 100);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    stooge_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    stooge_sort(&mut TypedElements::new(v, compare));
}

pub fn stooge_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    stooge_range(v, 0, len);
}

/// Orders the first and last element of `start..start + len`, then for three or more elements
/// sorts the leading two thirds, the trailing two thirds and the leading two thirds again. The
/// thirds overlap, `len - len / 3` elements each.
fn stooge_range<E: Elements + ?Sized>(v: &mut E, start: usize, len: usize) {
    if len <= 1 {
        return;
    }

    let last = start + len - 1;
    if is_greater(v, start, last) {
        swap(v, start, last);
    }

    if len >= 3 {
        let third = len / 3;
        let two_thirds = len - third;

        stooge_range(v, start, two_thirds);
        stooge_range(v, start + third, two_thirds);
        stooge_range(v, start, two_thirds);
    }
}
