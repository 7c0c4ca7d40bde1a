//! Sorts that may reorder equal elements.

pub mod comb;
pub mod heapsort;
pub mod quicksort;
pub mod selection;
pub mod slowsort;
pub mod stooge;
