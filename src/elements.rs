//! Index based access to the sequence being sorted.
//!
//! Every algorithm in this crate is written once against [`Elements`] and driven either by a
//! typed slice ([`TypedElements`]) or by an untyped byte buffer ([`ByteElements`]).

use std::cmp::Ordering;

/// A sequence of equally sized elements that can be compared and exchanged by position.
///
/// Indices past `len()` panic, they are never produced by the algorithms for well formed input.
pub trait Elements {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Three-way compares the element at `a` with the element at `b` using the caller's
    /// comparison function.
    fn compare(&mut self, a: usize, b: usize) -> Ordering;

    /// Exchanges the content of the slots `a` and `b`. `a == b` leaves the content unchanged.
    ///
    /// Algorithms go through [`crate::swap::swap`] instead, which also does the accounting.
    fn exchange(&mut self, a: usize, b: usize);
}

/// Shorthand used by all the exchange based sorts, `true` if `a` must go after `b`.
#[inline]
pub(crate) fn is_greater<E: Elements + ?Sized>(v: &mut E, a: usize, b: usize) -> bool {
    v.compare(a, b) == Ordering::Greater
}

pub struct TypedElements<'a, T, F> {
    v: &'a mut [T],
    compare: F,
}

impl<'a, T, F> TypedElements<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(v: &'a mut [T], compare: F) -> Self {
        Self { v, compare }
    }
}

impl<'a, T, F> Elements for TypedElements<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

/// `count` elements of `elem_size` bytes each, stored back to back at the start of `bytes`.
///
/// Constructed through [`crate::erased`], which validates the geometry against the buffer.
pub struct ByteElements<'a, F> {
    bytes: &'a mut [u8],
    count: usize,
    elem_size: usize,
    compare: F,
}

impl<'a, F> ByteElements<'a, F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    /// `bytes` must hold at least `count * elem_size` bytes and `elem_size` must be non-zero.
    /// Anything past `count * elem_size` is never touched.
    pub(crate) fn new(bytes: &'a mut [u8], count: usize, elem_size: usize, compare: F) -> Self {
        debug_assert!(elem_size > 0);
        debug_assert!(count
            .checked_mul(elem_size)
            .map_or(false, |required| required <= bytes.len()));

        Self {
            bytes,
            count,
            elem_size,
            compare,
        }
    }
}

impl<'a, F> Elements for ByteElements<'a, F>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        assert!(a < self.count && b < self.count);

        let size = self.elem_size;
        let (start_a, start_b) = (a * size, b * size);
        (self.compare)(
            &self.bytes[start_a..(start_a + size)],
            &self.bytes[start_b..(start_b + size)],
        )
    }

    fn exchange(&mut self, a: usize, b: usize) {
        assert!(a < self.count && b < self.count);

        if a == b {
            return;
        }

        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let size = self.elem_size;

        let (head, tail) = self.bytes.split_at_mut(hi * size);
        head[(lo * size)..((lo + 1) * size)].swap_with_slice(&mut tail[..size]);
    }
}
