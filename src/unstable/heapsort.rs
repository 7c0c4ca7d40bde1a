//! Heapsort on an implicit binary max-heap.

use std::cmp::Ordering;

use crate::elements::{is_greater, Elements, TypedElements};
use crate::swap::swap;

sort_impl!("heapsort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(&mut TypedElements::new(v, T::cmp));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(&mut TypedElements::new(v, compare));
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub fn heapsort<E: Elements + ?Sized>(v: &mut E) {
    let len = v.len();

    // Build the heap in linear time, starting at the last node that has children.
    for node in (0..len / 2).rev() {
        sift_down(v, len, node);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        swap(v, 0, end);
        sift_down(v, end, 0);
    }
}

/// Restores the heap invariant `parent >= child` for the heap `0..heap_len` below `node`,
/// assuming both subtrees of `node` already satisfy it.
pub fn sift_down<E: Elements + ?Sized>(v: &mut E, heap_len: usize, mut node: usize) {
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= heap_len {
            break;
        }

        // Choose the greater child, the right one only if it is strictly greater.
        if child + 1 < heap_len && is_greater(v, child + 1, child) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_greater(v, child, node) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        swap(v, node, child);
        node = child;
    }
}
