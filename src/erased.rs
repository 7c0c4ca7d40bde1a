//! Sorting untyped byte buffers.
//!
//! The caller describes the buffer as `count` elements of `element_size` bytes and supplies a
//! comparison function over element byte slices. Bytes beyond `count * element_size` are left
//! alone, the buffer may be longer than that.
//!
//! ```ignore
//! let mut buf = [3u8, 0, 1, 0, 2, 0];
//! erased::sort_insertion(&mut buf, 3, 2, |a, b| a.cmp(b))?;
//! ```

use std::cmp::Ordering;

use crate::algorithm::Algorithm;
use crate::elements::ByteElements;
use crate::error::SortError;

pub fn sort_bytes<F>(
    algorithm: Algorithm,
    buffer: &mut [u8],
    count: usize,
    element_size: usize,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mut elements = elements(buffer, count, element_size, compare)?;
    algorithm.sort_elements(&mut elements);

    Ok(())
}

/// Checks the buffer geometry and wraps it for the algorithms.
pub fn elements<F>(
    buffer: &mut [u8],
    count: usize,
    element_size: usize,
    compare: F,
) -> Result<ByteElements<'_, F>, SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    if element_size == 0 {
        return Err(SortError::ZeroElementSize);
    }

    let required = count
        .checked_mul(element_size)
        .ok_or(SortError::SizeOverflow {
            count,
            element_size,
        })?;

    if buffer.len() < required {
        return Err(SortError::BufferTooShort {
            required,
            actual: buffer.len(),
        });
    }

    Ok(ByteElements::new(buffer, count, element_size, compare))
}

macro_rules! erased_sort_fns {
    ($($name:ident => $algorithm:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Sorts `count` elements of `element_size` bytes with ", stringify!($name), " sort.")]
                pub fn [<sort_ $name>]<F>(
                    buffer: &mut [u8],
                    count: usize,
                    element_size: usize,
                    compare: F,
                ) -> Result<(), SortError>
                where
                    F: FnMut(&[u8], &[u8]) -> Ordering,
                {
                    sort_bytes(Algorithm::$algorithm, buffer, count, element_size, compare)
                }
            )*
        }
    };
}

erased_sort_fns!(
    bubble => Bubble,
    cocktail_shaker => CocktailShaker,
    odd_even => OddEven,
    comb => Comb,
    gnome => Gnome,
    quicksort => Quicksort,
    slowsort => Slowsort,
    stooge => Stooge,
    selection => Selection,
    heapsort => Heapsort,
    insertion => Insertion,
);
