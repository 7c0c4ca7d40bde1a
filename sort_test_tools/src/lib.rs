pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    /// Largest input length the generic tests will feed this sort. Some algorithms are
    /// intentionally so slow that anything beyond a few dozen elements takes forever.
    fn max_len() -> usize {
        usize::MAX
    }
}

pub mod patterns;
pub mod types;
