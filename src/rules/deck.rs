//! Deck generation.
//!
//! A deck for a level holds `pair_count(level)` distinct pair-identities,
//! each exactly twice, in uniformly random order.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::grid::pair_count;
use crate::core::shuffle::{sample, shuffle_in_place};
use crate::core::{ColorId, IconId, Palette, RandomSource, Tile};

/// Shuffled tiles of one board, addressed by position.
///
/// Backed by `im::Vector` so sessions that share a deck clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vector<Tile>,
}

impl Deck {
    /// Deal a fresh deck for `level`.
    ///
    /// Colors and icons are each sampled without replacement and zipped
    /// with wrap-around, so a palette smaller than the pair count reuses
    /// tokens cyclically instead of failing.
    pub fn deal<R: RandomSource + ?Sized>(level: u32, palette: &Palette, rng: &mut R) -> Self {
        let pairs = pair_count(level);
        let color_ids: Vec<ColorId> = palette.color_ids().collect();
        let icon_ids: Vec<IconId> = palette.icon_ids().collect();

        let colors = sample(&color_ids, pairs, rng);
        let icons = sample(&icon_ids, pairs, rng);

        let mut tiles = Vec::with_capacity(pairs * 2);
        for (&color, &icon) in colors.iter().zip(icons.iter()) {
            let tile = Tile::new(color, icon);
            tiles.push(tile);
            tiles.push(tile);
        }

        shuffle_in_place(&mut tiles, rng);
        Self::from(tiles)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// How many times each pair-identity occurs.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<Tile, usize> {
        let mut counts = FxHashMap::default();
        for tile in &self.tiles {
            *counts.entry(*tile).or_insert(0) += 1;
        }
        counts
    }

    /// Every pair-identity present occurs exactly twice.
    #[must_use]
    pub fn is_well_paired(&self) -> bool {
        self.pair_counts().values().all(|&n| n == 2)
    }
}

impl From<Vec<Tile>> for Deck {
    fn from(tiles: Vec<Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::rules::grid::tile_count;

    #[test]
    fn test_deal_sizes_per_level() {
        let palette = Palette::default();
        let mut rng = GameRng::new(42);

        for level in 1..=6 {
            let deck = Deck::deal(level, &palette, &mut rng);
            assert_eq!(deck.len(), tile_count(level));
            assert_eq!(deck.pair_counts().len(), pair_count(level));
            assert!(deck.is_well_paired());
        }
    }

    #[test]
    fn test_deal_is_deterministic_for_seed() {
        let palette = Palette::default();
        let a = Deck::deal(2, &palette, &mut GameRng::new(9));
        let b = Deck::deal(2, &palette, &mut GameRng::new(9));
        let c = Deck::deal(2, &palette, &mut GameRng::new(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_wraps_small_palette() {
        // 3 colors, 4 icons: 12 distinct zipped pairs cover the 8 pairs of a 4x4 board.
        let palette = Palette::new(["r", "g", "b"], ["1", "2", "3", "4"]);
        let deck = Deck::deal(1, &palette, &mut GameRng::new(1));

        assert_eq!(deck.len(), 16);
        assert!(deck.is_well_paired());
        assert!(deck.iter().all(|t| t.color.index() < 3 && t.icon.index() < 4));
    }

    #[test]
    fn test_uneven_deck_is_not_well_paired() {
        let a = Tile::new(ColorId::new(0), IconId::new(0));
        let b = Tile::new(ColorId::new(1), IconId::new(0));
        let deck = Deck::from(vec![a, a, a, b]);
        assert!(!deck.is_well_paired());
        assert_eq!(deck.pair_counts()[&a], 3);
    }
}
