//! Single-player memory match.
//!
//! The player flips two tiles per turn looking for pairs of matching color
//! and icon:
//! - Each level starts with a timed preview of the whole board
//! - A match scores +10, a mismatch -10 (both configurable)
//! - Clearing the board unlocks the next, larger level
//! - Falling to zero points ends the game until a restart
//!
//! Levels 1-4 use 4x4, 6x6, 8x8 and 10x10 boards; later levels wrap back
//! to 4x4.

mod engine;
mod schedule;
mod session;
mod shell;

pub use engine::GameEngine;
pub use schedule::{EventKind, ScheduledEvent, Scheduler};
pub use session::{GameSession, MatchOutcome, Phase, SelectedTile, Selection};
pub use shell::{RenderSnapshot, ShellCommand, TileView};
