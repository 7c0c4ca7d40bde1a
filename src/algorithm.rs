use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::elements::{Elements, TypedElements};
use crate::error::SortError;
use crate::{stable, unstable};

/// Runtime handle for every algorithm in the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    CocktailShaker,
    OddEven,
    Comb,
    Gnome,
    Quicksort,
    Slowsort,
    Stooge,
    Selection,
    Heapsort,
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::CocktailShaker,
        Algorithm::OddEven,
        Algorithm::Comb,
        Algorithm::Gnome,
        Algorithm::Quicksort,
        Algorithm::Slowsort,
        Algorithm::Stooge,
        Algorithm::Selection,
        Algorithm::Heapsort,
        Algorithm::Insertion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::CocktailShaker => "cocktail_shaker",
            Algorithm::OddEven => "odd_even",
            Algorithm::Comb => "comb",
            Algorithm::Gnome => "gnome",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Slowsort => "slowsort",
            Algorithm::Stooge => "stooge",
            Algorithm::Selection => "selection",
            Algorithm::Heapsort => "heapsort",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Whether equal elements keep their relative input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::CocktailShaker
                | Algorithm::OddEven
                | Algorithm::Gnome
                | Algorithm::Insertion
        )
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        self.sort_by(v, T::cmp);
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_elements(&mut TypedElements::new(v, compare));
    }

    pub fn sort_elements<E: Elements + ?Sized>(self, v: &mut E) {
        match self {
            Algorithm::Bubble => stable::bubble::bubble_sort(v),
            Algorithm::CocktailShaker => stable::cocktail_shaker::cocktail_shaker_sort(v),
            Algorithm::OddEven => stable::odd_even::odd_even_sort(v),
            Algorithm::Comb => unstable::comb::comb_sort(v),
            Algorithm::Gnome => stable::gnome::gnome_sort(v),
            Algorithm::Quicksort => unstable::quicksort::quicksort(v),
            Algorithm::Slowsort => unstable::slowsort::slowsort(v),
            Algorithm::Stooge => unstable::stooge::stooge_sort(v),
            Algorithm::Selection => unstable::selection::selection_sort(v),
            Algorithm::Heapsort => unstable::heapsort::heapsort(v),
            Algorithm::Insertion => stable::insertion::insertion_sort(v),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}
