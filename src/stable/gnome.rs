//! Gnome sort.
//!
//! A single cursor walks the slice. Whenever the pair in front of it is out of order the element
//! gets carried backwards one exchange at a time, after which the cursor resumes from the
//! furthest position it has reached so far instead of walking forward again.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("gnome_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    gnome_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    gnome_sort(&mut TypedElements::new(v, compare));
}

pub fn gnome_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();

    // Furthest position ever reached, everything before it is sorted.
    let mut furthest = 1;
    while furthest < len {
        let mut pos = furthest;

        while pos > 0 && is_greater(v, pos - 1, pos) {
            swap(v, pos - 1, pos);
            pos -= 1;
        }

        furthest += 1;
    }
}
