//! Board rules: how big a level's grid is and how its deck is dealt.
//!
//! Both are pure functions of the level, the palette and the RNG, so the
//! state machine in `games::memory` never computes them itself.

pub mod deck;
pub mod grid;

pub use deck::Deck;
pub use grid::{grid_size, pair_count, tile_count, GRID_SIZES};
