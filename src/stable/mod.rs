//! Sorts that keep equal elements in their input order. All of them only ever exchange strictly
//! out-of-order neighbours.

pub mod bubble;
pub mod cocktail_shaker;
pub mod gnome;
pub mod insertion;
pub mod odd_even;
