//! # memory-match
//!
//! Game core for a single-player memory-matching tile game.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: The engine produces snapshots and consumes
//!    commands. Drawing, animation and assets belong to the host.
//!
//! 2. **Values, Not Mutation**: Every transition builds a new `GameSession`.
//!    Persistent `im` structures keep those copies O(1).
//!
//! 3. **Explicit Time**: Timers are scheduled events on a virtual clock,
//!    tagged with the deal they belong to. A timer from an old deal never
//!    touches a new one.
//!
//! 4. **Pluggable Randomness**: Dealing is generic over `RandomSource`, so
//!    tests run on seeded or scripted sources.
//!
//! ## Modules
//!
//! - `core`: Tiles, palettes, RNG, shuffle/sample, configuration
//! - `rules`: Grid-size policy and deck dealing
//! - `games`: The memory-match state machine and renderer boundary

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ColorId, IconId, Tile, Palette,
    GameRng, GameRngState, RandomSource,
    sample, shuffle, Sample,
    EngineConfig, ConfigError,
};

pub use crate::rules::{Deck, grid_size, pair_count, tile_count};

pub use crate::games::memory::{
    GameEngine, GameSession, MatchOutcome, Phase, SelectedTile,
    EventKind, ScheduledEvent,
    RenderSnapshot, ShellCommand, TileView,
};
