//! Helpers around the comparison function contract.
//!
//! A comparison function must describe a total order for the duration of a sort call. If it
//! doesn't, the result is some permutation of the input in unspecified order, or a panic. Memory
//! outside the sorted region is never accessed either way.

use std::cmp::Ordering;

/// Maps a C style three-way result (negative, zero, positive) to an [`Ordering`].
#[inline]
pub fn sign_to_ordering(result: i32) -> Ordering {
    result.cmp(&0)
}

/// Adapts a comparison function that returns a signed integer, like `|a, b| b - a`.
pub fn from_sign<T: ?Sized>(
    mut compare: impl FnMut(&T, &T) -> i32,
) -> impl FnMut(&T, &T) -> Ordering {
    move |a: &T, b: &T| sign_to_ordering(compare(a, b))
}

/// Flips the order described by `compare`.
pub fn reverse<T: ?Sized>(
    mut compare: impl FnMut(&T, &T) -> Ordering,
) -> impl FnMut(&T, &T) -> Ordering {
    move |a: &T, b: &T| compare(b, a)
}

/// Called by algorithms that can only keep going forever if the comparison function lies.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn total_order_violation() -> ! {
    panic!("comparison function does not implement a total order");
}
