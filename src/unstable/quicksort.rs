//! Quicksort with a three-way partition around a median-of-three pivot.

use std::cmp::Ordering;

use crate::compare::total_order_violation;
use crate::elements::{Elements, TypedElements};
use crate::swap::swap;

sort_impl!("quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(&mut TypedElements::new(v, compare));
}

pub fn quicksort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();
    quicksort_range(v, 0, len);
}

/// Sorts `start..start + len`.
///
/// Elements equal to the pivot end up in their final position and are never looked at again.
/// Recursion only goes into the smaller of the two remaining zones, the larger one is handled by
/// the loop, which bounds the stack depth to *O*(log(*n*)).
fn quicksort_range<E: Elements + ?Sized>(v: &mut E, mut start: usize, mut len: usize) {
    while len > 1 {
        let (eq_start, gt_start) = partition(v, start, len);

        let lt_len = eq_start - start;
        let gt_len = start + len - gt_start;

        // A total order always leaves at least the pivot in the equal zone.
        if lt_len == len || gt_len == len {
            total_order_violation();
        }

        if lt_len < gt_len {
            quicksort_range(v, start, lt_len);
            start = gt_start;
            len = gt_len;
        } else {
            quicksort_range(v, gt_start, gt_len);
            len = lt_len;
        }
    }
}

/// Three-way partitions `start..start + len` into `less | equal | greater` relative to the
/// median-of-three pivot and returns the absolute start indices of the equal and greater zones.
///
/// Single pass, Dutch national flag style: `cur` scans forward, `eq_start` marks the first
/// element of the equal zone and `gt_start` shrinks from the end. The pivot moves along with the
/// data so its position has to be tracked across every swap.
pub fn partition<E: Elements + ?Sized>(v: &mut E, start: usize, len: usize) -> (usize, usize) {
    let mut pivot = median_of_three(v, start, len);

    let mut cur = start;
    let mut eq_start = start;
    let mut gt_start = start + len;

    while cur < gt_start {
        match v.compare(cur, pivot) {
            Ordering::Less => {
                // Moves the first element of the equal zone, if any, behind its end.
                swap(v, cur, eq_start);
                pivot = follow_swap(pivot, cur, eq_start);
                cur += 1;
                eq_start += 1;
            }
            Ordering::Greater => {
                gt_start -= 1;
                swap(v, cur, gt_start);
                pivot = follow_swap(pivot, cur, gt_start);
            }
            Ordering::Equal => {
                cur += 1;
            }
        }
    }

    (eq_start, gt_start)
}

/// Where the element at `pos` lives after swapping `a` and `b`.
#[inline]
fn follow_swap(pos: usize, a: usize, b: usize) -> usize {
    if pos == a {
        b
    } else if pos == b {
        a
    } else {
        pos
    }
}

/// Picks the median of the first, middle and last element of `start..start + len`. Ranges of
/// one or two elements use their first element.
pub fn median_of_three<E: Elements + ?Sized>(v: &mut E, start: usize, len: usize) -> usize {
    if len <= 2 {
        return start;
    }

    let a = start;
    let b = start + len / 2;
    let c = start + len - 1;

    let is_less = |v: &mut E, x: usize, y: usize| v.compare(x, y) == Ordering::Less;

    if is_less(v, a, b) {
        if is_less(v, b, c) {
            b
        } else if is_less(v, a, c) {
            c
        } else {
            a
        }
    } else if is_less(v, a, c) {
        a
    } else if is_less(v, b, c) {
        c
    } else {
        b
    }
}
