//! The element swap primitive and its instrumentation.
//!
//! Every exchange any algorithm performs goes through [`swap`], which bumps a per-thread counter
//! exactly once per call, independent of the element size and even if `a == b`. Sorts running on
//! different threads never observe each other's swaps.

use std::cell::Cell;

use crate::elements::Elements;

thread_local! {
    static SWAP_COUNT: Cell<u64> = Cell::new(0);
}

#[inline]
pub fn swap<E: Elements + ?Sized>(v: &mut E, a: usize, b: usize) {
    SWAP_COUNT.with(|count| count.set(count.get() + 1));
    v.exchange(a, b);
}

/// Swaps performed on this thread since the last [`reset_swap_count`].
pub fn swap_count() -> u64 {
    SWAP_COUNT.with(|count| count.get())
}

pub fn reset_swap_count() {
    SWAP_COUNT.with(|count| count.set(0));
}

/// Runs `f` and returns its result together with the number of swaps it performed.
///
/// Does not reset the running counter, so measurements can nest.
pub fn count_swaps<R>(f: impl FnOnce() -> R) -> (R, u64) {
    let before = swap_count();
    let result = f();
    let after = swap_count();

    (result, after.wrapping_sub(before))
}
