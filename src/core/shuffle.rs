//! Fisher-Yates shuffling and sampling without replacement.
//!
//! Sampling never invents duplicates. When more elements are requested than
//! the source holds, the [`Sample`] reuses its drawn elements cyclically
//! through modulo indexing.

use super::rng::RandomSource;

/// Uniformly permute `items` with an in-place Fisher-Yates pass.
///
/// Walks from the last index down, swapping each slot with a uniformly chosen
/// slot in `[0, i]`. Takes ownership, so pass a clone to keep the original.
#[must_use]
pub fn shuffle<T, R: RandomSource + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    shuffle_in_place(&mut items, rng);
    items
}

/// In-place variant of [`shuffle`].
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `source` and keep the first `count` elements.
#[must_use]
pub fn sample<T: Clone, R: RandomSource + ?Sized>(source: &[T], count: usize, rng: &mut R) -> Sample<T> {
    let mut drawn = shuffle(source.to_vec(), rng);
    drawn.truncate(count);
    Sample { drawn, count }
}

/// Result of [`sample`]: `count` logical slots backed by at most
/// `source.len()` distinct elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample<T> {
    drawn: Vec<T>,
    count: usize,
}

impl<T> Sample<T> {
    /// Number of logical slots (always the requested count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The distinct elements actually drawn, in shuffled order.
    #[must_use]
    pub fn distinct(&self) -> &[T] {
        &self.drawn
    }

    /// Slot `index`, wrapping around the drawn elements.
    ///
    /// `None` past the logical length or when nothing could be drawn.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count || self.drawn.is_empty() {
            return None;
        }
        self.drawn.get(index % self.drawn.len())
    }

    /// Iterate all `len()` slots.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }
}
