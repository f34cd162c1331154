//! Game session: the immutable-until-replaced state of one deal.
//!
//! Every transition returns a new `GameSession` and leaves `self` alone.
//! Deck and matched set are `im` structures, so those copies are O(1).

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Tile;
use crate::rules::{grid_size, Deck};

/// A face-up, unresolved tile chosen this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTile {
    pub tile: Tile,
    pub index: usize,
}

/// At most two selected tiles, stored inline.
pub type Selection = SmallVec<[SelectedTile; 2]>;

/// Derived phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// All tiles shown at the start of a level.
    Previewing,
    /// Waiting for clicks.
    Playing,
    /// Two tiles selected, resolution pending.
    Resolving,
    /// Every tile matched.
    LevelClear,
    /// Score dropped to zero or below; only a restart leaves this phase.
    GameOver,
}

/// Result of resolving a two-tile selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Matched {
        pair: [usize; 2],
        level_clear: bool,
    },
    Mismatched {
        pair: [usize; 2],
        game_over: bool,
    },
}

impl MatchOutcome {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    #[must_use]
    pub fn pair(&self) -> [usize; 2] {
        match self {
            MatchOutcome::Matched { pair, .. } | MatchOutcome::Mismatched { pair, .. } => *pair,
        }
    }
}

/// State of one deal of one level.
///
/// `generation` identifies the deal; timers scheduled for an older
/// generation must not touch this session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    generation: u64,
    level: u32,
    grid_size: usize,
    deck: Deck,
    selection: Selection,
    matched: OrdSet<usize>,
    score: i64,
    level_clear: bool,
    reveal_all: bool,
}

impl GameSession {
    /// Fresh session for a newly dealt deck, starting in the preview.
    #[must_use]
    pub fn new(generation: u64, level: u32, deck: Deck, score: i64) -> Self {
        Self {
            generation,
            level,
            grid_size: grid_size(level),
            deck,
            selection: Selection::new(),
            matched: OrdSet::new(),
            score,
            level_clear: false,
            reveal_all: true,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn selection(&self) -> &[SelectedTile] {
        &self.selection
    }

    #[must_use]
    pub fn matched(&self) -> &OrdSet<usize> {
        &self.matched
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn is_level_clear(&self) -> bool {
        self.level_clear
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.reveal_all
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.score <= 0
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    /// Current phase. Game over wins over everything else.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else if self.level_clear {
            Phase::LevelClear
        } else if self.selection.len() == 2 {
            Phase::Resolving
        } else if self.reveal_all {
            Phase::Previewing
        } else {
            Phase::Playing
        }
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.iter().any(|s| s.index == index)
    }

    /// Whether the tile at `index` should be drawn face up.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.reveal_all || self.is_selected(index) || self.matched.contains(&index)
    }

    /// Whether a click on `index` would be accepted.
    #[must_use]
    pub fn can_reveal(&self, index: usize) -> bool {
        !self.is_game_over()
            && index < self.deck.len()
            && self.selection.len() < 2
            && !self.is_selected(index)
            && !self.matched.contains(&index)
    }

    // === Transitions ===

    /// Session with `index` added to the selection, or `None` if the click
    /// is not allowed.
    #[must_use]
    pub fn with_revealed(&self, index: usize) -> Option<Self> {
        if !self.can_reveal(index) {
            return None;
        }
        let tile = *self.deck.get(index)?;

        let mut next = self.clone();
        next.selection.push(SelectedTile { tile, index });
        Some(next)
    }

    /// Session with the preview over.
    #[must_use]
    pub fn with_preview_ended(&self) -> Self {
        Self {
            reveal_all: false,
            ..self.clone()
        }
    }

    /// Resolve a full selection in one step.
    ///
    /// Returns `None` unless exactly two tiles are selected. On a match both
    /// positions join the matched set and the level is clear once the set
    /// covers the whole deck.
    #[must_use]
    pub fn resolved(&self, reward: i64, penalty: i64) -> Option<(Self, MatchOutcome)> {
        let [first, second] = match self.selection.as_slice() {
            [a, b] => [*a, *b],
            _ => return None,
        };
        let pair = [first.index, second.index];

        let mut next = self.clone();
        next.selection.clear();

        let outcome = if first.tile.matches(&second.tile) {
            next.matched.insert(first.index);
            next.matched.insert(second.index);
            next.score = next.score.saturating_add(reward);
            next.level_clear = next.matched.len() == next.deck.len();
            MatchOutcome::Matched {
                pair,
                level_clear: next.level_clear,
            }
        } else {
            next.score = next.score.saturating_sub(penalty);
            MatchOutcome::Mismatched {
                pair,
                game_over: next.is_game_over(),
            }
        };

        Some((next, outcome))
    }
}
