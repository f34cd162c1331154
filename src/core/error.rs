//! Configuration errors.
//!
//! Engine operations are total: bad player input is ignored, never an error.
//! Only building an engine from a configuration can fail.

use thiserror::Error;

/// Why an [`EngineConfig`](super::EngineConfig) was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("palette has no colors")]
    EmptyColors,

    #[error("palette has no icons")]
    EmptyIcons,

    #[error("palette lists more than {max} {kind} tokens")]
    TooManyTokens { kind: &'static str, max: usize },

    #[error("duplicate color token {0:?}")]
    DuplicateColor(String),

    #[error("duplicate icon token {0:?}")]
    DuplicateIcon(String),

    #[error("starting score must be positive, got {0}")]
    NonPositiveScore(i64),

    #[error("{field} must not be negative, got {value}")]
    NegativeScoreStep { field: &'static str, value: i64 },

    #[error(
        "{colors} colors and {icons} icons cannot form {pairs} distinct pairs for a {grid_size}x{grid_size} grid"
    )]
    AmbiguousPairs {
        grid_size: usize,
        pairs: usize,
        colors: usize,
        icons: usize,
    },

    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}
