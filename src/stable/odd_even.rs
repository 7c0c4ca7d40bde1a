//! Odd-even transposition sort, also known as brick sort.

use std::cmp::Ordering;

use crate::compare::total_order_violation;
use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("odd_even_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    odd_even_sort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    odd_even_sort(&mut TypedElements::new(v, compare));
}

/// Alternates between the pairs starting at even and at odd indices until a full round finds
/// nothing to exchange.
///
/// A total order is sorted after at most `len` phases, so a round count beyond `len` can only
/// mean the comparison function is inconsistent. That case panics instead of looping forever.
pub fn odd_even_sort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut rounds = 0;
    loop {
        let mut is_sorted = true;

        for phase_start in [0, 1] {
            for i in (phase_start..(len - 1)).step_by(2) {
                if is_greater(v, i, i + 1) {
                    swap(v, i, i + 1);
                    is_sorted = false;
                }
            }
        }

        if is_sorted {
            return;
        }

        rounds += 1;
        if rounds > len {
            total_order_violation();
        }
    }
}
