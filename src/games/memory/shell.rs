//! Boundary with the rendering layer.
//!
//! The renderer reads a [`RenderSnapshot`] and sends back [`ShellCommand`]s.
//! Commands that make no sense in the current phase are ignored, which is
//! where game over locks out everything but a restart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::GameEngine;
use super::session::Phase;
use crate::core::RandomSource;

/// Input forwarded by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShellCommand {
    TileClick { index: usize },
    /// "Play Again" on the level-clear banner.
    PlayAgain,
    /// "Next Level" on the level-clear banner.
    NextLevel,
    /// "Restart" on the game-over banner.
    RestartAfterGameOver,
}

/// One grid cell as the renderer should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileView<'a> {
    pub index: usize,
    pub color: &'a str,
    pub icon: &'a str,
    pub face_up: bool,
    pub matched: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot<'a> {
    pub level: u32,
    pub grid_size: usize,
    pub score: i64,
    pub phase: Phase,
    pub level_clear: bool,
    pub game_over: bool,
    pub previewing: bool,
    pub pairs_found: usize,
    pub total_pairs: usize,
    pub tiles: Vec<TileView<'a>>,
}

impl<R: RandomSource> GameEngine<R> {
    /// Current frame for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        let session = self.session();
        let palette = &self.config().palette;

        let tiles = session
            .deck()
            .iter()
            .enumerate()
            .map(|(index, tile)| TileView {
                index,
                color: palette.color(tile.color).unwrap_or_default(),
                icon: palette.icon(tile.icon).unwrap_or_default(),
                face_up: session.is_face_up(index),
                matched: session.matched().contains(&index),
            })
            .collect();

        RenderSnapshot {
            level: session.level(),
            grid_size: session.grid_size(),
            score: session.score(),
            phase: session.phase(),
            level_clear: session.is_level_clear(),
            game_over: session.is_game_over(),
            previewing: session.is_previewing(),
            pairs_found: session.pairs_found(),
            total_pairs: session.total_pairs(),
            tiles,
        }
    }

    /// Route a renderer command. Returns whether it changed anything.
    pub fn apply(&mut self, command: ShellCommand) -> bool {
        let phase = self.phase();
        match (command, phase) {
            (ShellCommand::TileClick { index }, _) => self.reveal_tile(index),
            (ShellCommand::PlayAgain, Phase::LevelClear) => {
                self.play_again();
                true
            }
            (ShellCommand::NextLevel, Phase::LevelClear) => {
                self.advance_level();
                true
            }
            (ShellCommand::RestartAfterGameOver, Phase::GameOver) => {
                self.restart();
                true
            }
            (command, phase) => {
                debug!(?command, ?phase, "ignored command");
                false
            }
        }
    }
}
