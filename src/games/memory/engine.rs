//! The memory-match state machine.
//!
//! `GameEngine` owns the current [`GameSession`], the RNG and the clock.
//! Player input and timer callbacks come in through the methods below; the
//! session is replaced wholesale on every transition.
//!
//! ## Phases
//!
//! `Previewing -> Playing -> (Resolving <-> Playing)* -> LevelClear | GameOver`
//!
//! Entering `Previewing` schedules `EndPreview` after `level * preview_unit`.
//! Entering `Resolving` schedules `ResolveSelection` after the resolution
//! delay. Both carry the session generation and are dropped if a new deal
//! has started by the time they fire.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::schedule::{EventKind, ScheduledEvent, Scheduler};
use super::session::{GameSession, MatchOutcome, Phase};
use crate::core::{ConfigError, EngineConfig, GameRng, RandomSource};
use crate::rules::{tile_count, Deck};

/// Single-player memory game engine.
///
/// Generic over the random source so tests can script deals.
///
/// ```
/// use std::time::Duration;
/// use memory_match::{EngineConfig, GameEngine, Phase};
///
/// let mut engine = GameEngine::new(EngineConfig::default().with_seed(7)).unwrap();
/// assert_eq!(engine.phase(), Phase::Previewing);
///
/// engine.advance_clock(Duration::from_secs(1));
/// assert_eq!(engine.phase(), Phase::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: EngineConfig,
    rng: R,
    scheduler: Scheduler,
    session: GameSession,
    generation: u64,
}

impl GameEngine<GameRng> {
    /// Create an engine at level 1 with the starting score.
    ///
    /// Uses `config.seed` when set, otherwise platform entropy.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine with a caller-supplied random source.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let score = config.starting_score;
        let mut engine = Self {
            config,
            rng,
            scheduler: Scheduler::new(),
            session: GameSession::new(0, 1, Deck::default(), score),
            generation: 0,
        };
        engine.new_game(1);
        Ok(engine)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Engine clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timers waiting to fire, earliest first.
    #[must_use]
    pub fn pending_events(&self) -> &[ScheduledEvent] {
        self.scheduler.pending()
    }

    // === Transitions ===

    /// Deal a new board for `level`, keeping the current score.
    ///
    /// Clears selection, matched set and level-clear flag, starts the
    /// preview, and invalidates every timer of the previous deal.
    pub fn new_game(&mut self, level: u32) -> &GameSession {
        let deck = Deck::deal(level, &self.config.palette, &mut self.rng);
        self.install(level, deck)
    }

    /// Start `level` with a prepared deck instead of a random deal.
    ///
    /// For scripted boards (tutorials, replays). Returns `None` and leaves the
    /// session untouched if the deck does not fit the level's grid or is not
    /// made of exact pairs.
    pub fn new_game_with_deck(&mut self, level: u32, deck: Deck) -> Option<&GameSession> {
        if deck.len() != tile_count(level) || !deck.is_well_paired() {
            warn!(level, tiles = deck.len(), "rejected prepared deck");
            return None;
        }
        Some(self.install(level, deck))
    }

    /// Flip the tile at `index`.
    ///
    /// A no-op returning `false` when two tiles are already up, the tile is
    /// already selected or matched, the index is off the board, or the game
    /// is over. The second flip schedules the resolution.
    pub fn reveal_tile(&mut self, index: usize) -> bool {
        if self.session.is_previewing() && !self.config.reveal_during_preview {
            debug!(index, "ignored reveal during preview");
            return false;
        }

        let Some(next) = self.session.with_revealed(index) else {
            debug!(index, phase = ?self.session.phase(), "ignored reveal");
            return false;
        };
        self.session = next;
        debug!(index, selected = self.session.selection().len(), "revealed tile");

        if self.session.selection().len() == 2 {
            self.scheduler.schedule(
                self.config.resolution_delay(),
                self.session.generation(),
                EventKind::ResolveSelection,
            );
        }
        true
    }

    /// Compare the two selected tiles and commit the outcome.
    ///
    /// Normally reached through the `ResolveSelection` timer. Returns `None`
    /// if fewer than two tiles are selected.
    pub fn check_match(&mut self) -> Option<MatchOutcome> {
        let (next, outcome) = self
            .session
            .resolved(self.config.match_reward, self.config.mismatch_penalty)?;
        self.session = next;

        match outcome {
            MatchOutcome::Matched { pair, level_clear } => {
                debug!(?pair, score = self.session.score(), "pair matched");
                if level_clear {
                    info!(level = self.session.level(), score = self.session.score(), "level clear");
                }
            }
            MatchOutcome::Mismatched { pair, game_over } => {
                debug!(?pair, score = self.session.score(), "pair mismatched");
                if game_over {
                    info!(level = self.session.level(), score = self.session.score(), "game over");
                }
            }
        }
        Some(outcome)
    }

    /// Move to the next level, keeping the score.
    ///
    /// Meant for the level-clear banner; calling it at other times is a
    /// caller error and is not prevented.
    pub fn advance_level(&mut self) -> &GameSession {
        if !self.session.is_level_clear() {
            warn!(level = self.session.level(), "advancing level before it was cleared");
        }
        let level = self.session.level().saturating_add(1);
        info!(level, "advancing level");
        self.new_game(level)
    }

    /// Deal the current level again, keeping the score.
    pub fn play_again(&mut self) -> &GameSession {
        self.new_game(self.session.level())
    }

    /// Reset the score and deal the current level again.
    ///
    /// The level is not reset.
    pub fn restart(&mut self) -> &GameSession {
        info!(level = self.session.level(), "restarting after game over");
        let deck = Deck::deal(self.session.level(), &self.config.palette, &mut self.rng);
        self.install_with_score(self.session.level(), deck, self.config.starting_score)
    }

    // === Timers ===

    /// Advance the clock by `elapsed`, firing every event that falls due.
    ///
    /// Returns how many events changed the session.
    pub fn advance_clock(&mut self, elapsed: Duration) -> usize {
        let until = self
            .scheduler
            .now()
            .checked_add(elapsed)
            .unwrap_or(Duration::MAX);
        let mut applied = 0;
        while let Some(event) = self.scheduler.pop_due(until) {
            if self.dispatch(event) {
                applied += 1;
            }
        }
        self.scheduler.advance_to(until);
        applied
    }

    /// Deliver an event from the host's own timer.
    ///
    /// Each event applies at most once: one that is no longer pending
    /// (already fired, redelivered, or dropped with an old deal) is ignored.
    /// Returns `false` if the event was ignored or had nothing to do.
    pub fn handle_event(&mut self, event: ScheduledEvent) -> bool {
        if !self.scheduler.remove(&event) {
            debug!(
                kind = ?event.kind,
                event_generation = event.generation,
                due = ?event.due,
                "ignoring event that is not pending"
            );
            return false;
        }
        self.scheduler.advance_to(event.due);
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: ScheduledEvent) -> bool {
        if event.generation != self.session.generation() {
            debug!(
                kind = ?event.kind,
                event_generation = event.generation,
                current = self.session.generation(),
                "discarding stale timer"
            );
            return false;
        }

        match event.kind {
            EventKind::EndPreview => {
                if !self.session.is_previewing() {
                    return false;
                }
                self.session = self.session.with_preview_ended();
                debug!(level = self.session.level(), "preview ended");
                true
            }
            EventKind::ResolveSelection => self.check_match().is_some(),
        }
    }

    // === Internals ===

    fn install(&mut self, level: u32, deck: Deck) -> &GameSession {
        let score = self.session.score();
        self.install_with_score(level, deck, score)
    }

    fn install_with_score(&mut self, level: u32, deck: Deck, score: i64) -> &GameSession {
        self.generation += 1;
        self.session = GameSession::new(self.generation, level, deck, score);

        let dropped = self.scheduler.purge_stale(self.generation);
        self.scheduler.schedule(
            self.config.preview_duration(level),
            self.generation,
            EventKind::EndPreview,
        );

        info!(
            level,
            grid_size = self.session.grid_size(),
            score,
            generation = self.generation,
            dropped_timers = dropped,
            "dealt new board"
        );
        &self.session
    }
}
