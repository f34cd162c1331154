//! Engine configuration.
//!
//! Hosts build an [`EngineConfig`] once, either from [`Default`] plus the
//! `with_*` builders or from JSON, and hand it to
//! [`GameEngine::new`](crate::games::memory::GameEngine::new), which
//! validates it.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::tile::Palette;
use crate::rules::grid::GRID_SIZES;

/// Scoring, timing and palette settings for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score at the start of a game and after a game-over restart.
    pub starting_score: i64,

    /// Points gained for a matched pair.
    pub match_reward: i64,

    /// Points lost for a mismatched pair.
    pub mismatch_penalty: i64,

    /// Preview lasts `level * preview_unit_ms` milliseconds.
    pub preview_unit_ms: u64,

    /// Delay between the second flip and its resolution.
    pub resolution_delay_ms: u64,

    /// Accept tile clicks while the preview is still showing.
    pub reveal_during_preview: bool,

    /// Color and icon tokens pairs are drawn from.
    pub palette: Palette,

    /// Fixed RNG seed. `None` seeds from platform entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_score: 100,
            match_reward: 10,
            mismatch_penalty: 10,
            preview_unit_ms: 1000,
            resolution_delay_ms: 1000,
            reveal_during_preview: true,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }

    #[must_use]
    pub fn with_preview_unit(mut self, unit: Duration) -> Self {
        self.preview_unit_ms = u64::try_from(unit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// How long the preview lasts on `level`.
    #[must_use]
    pub fn preview_duration(&self, level: u32) -> Duration {
        Duration::from_millis(self.preview_unit_ms.saturating_mul(u64::from(level)))
    }

    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }

    /// Check the palette and scoring can support every grid size.
    ///
    /// With `c` drawn colors and `i` drawn icons zipped cyclically, the first
    /// `lcm(c, i)` pairs are distinct, so each board needs
    /// `lcm(min(n, colors), min(n, icons)) >= n` for `n` pairs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_score <= 0 {
            return Err(ConfigError::NonPositiveScore(self.starting_score));
        }
        if self.match_reward < 0 {
            return Err(ConfigError::NegativeScoreStep {
                field: "match_reward",
                value: self.match_reward,
            });
        }
        if self.mismatch_penalty < 0 {
            return Err(ConfigError::NegativeScoreStep {
                field: "mismatch_penalty",
                value: self.mismatch_penalty,
            });
        }

        let colors = &self.palette.colors;
        let icons = &self.palette.icons;
        if colors.is_empty() {
            return Err(ConfigError::EmptyColors);
        }
        if icons.is_empty() {
            return Err(ConfigError::EmptyIcons);
        }

        let max = usize::from(u16::MAX);
        if colors.len() > max {
            return Err(ConfigError::TooManyTokens { kind: "color", max });
        }
        if icons.len() > max {
            return Err(ConfigError::TooManyTokens { kind: "icon", max });
        }

        if let Some(dup) = first_duplicate(colors) {
            return Err(ConfigError::DuplicateColor(dup.to_string()));
        }
        if let Some(dup) = first_duplicate(icons) {
            return Err(ConfigError::DuplicateIcon(dup.to_string()));
        }

        for grid_size in GRID_SIZES {
            let pairs = grid_size * grid_size / 2;
            let drawn_colors = pairs.min(colors.len());
            let drawn_icons = pairs.min(icons.len());
            if lcm(drawn_colors, drawn_icons) < pairs {
                return Err(ConfigError::AmbiguousPairs {
                    grid_size,
                    pairs,
                    colors: colors.len(),
                    icons: icons.len(),
                });
            }
        }

        Ok(())
    }
}

fn first_duplicate(tokens: &[String]) -> Option<&str> {
    let mut seen = FxHashSet::default();
    tokens
        .iter()
        .map(String::as_str)
        .find(|token| !seen.insert(*token))
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
