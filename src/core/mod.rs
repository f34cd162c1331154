//! Core building blocks: tiles, palettes, RNG, shuffling, configuration.
//!
//! Nothing here knows about levels or scoring; the game rules live in
//! `rules` and the state machine in `games::memory`.

pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;
pub mod tile;

pub use config::EngineConfig;
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use shuffle::{sample, shuffle, shuffle_in_place, Sample};
pub use tile::{ColorId, IconId, Palette, Tile};
