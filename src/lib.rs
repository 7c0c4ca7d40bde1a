//! Classic comparison based in-place sorting algorithms.
//!
//! Every algorithm module offers `sort`, `sort_by` and a `SortImpl` for the shared test harness,
//! plus its generic core operating on [`elements::Elements`]. The [`erased`] module exposes the
//! same algorithms over raw byte buffers with a runtime element size.

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, usize::MAX);
    };
    ($name:expr, $max_len:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            fn max_len() -> usize {
                $max_len
            }
        }
    };
}

pub mod algorithm;
pub mod compare;
pub mod elements;
pub mod erased;
pub mod error;
pub mod stable;
pub mod swap;
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::SortError;
