//! Game configuration.
//!
//! A game is configured once, at construction:
//! - `size`: dots per side of the square grid (default 4, 2 to 32768)
//! - `tie_break`: how equal final scores are resolved
//!
//! `BoardConfig` is plain serde data so hosts can load it from whatever
//! settings file they already have.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default dots per side.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest grid that still has a box.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest grid whose edge count, `2·N·(N-1)`, fits in a `u32`.
pub const MAX_BOARD_SIZE: usize = 32_768;

/// Check a dots-per-side count against the supported range.
pub(crate) fn check_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::BoardTooSmall { size });
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::BoardTooLarge {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

/// How a game with equal final scores is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Player one wins ties.
    #[default]
    FavorFirstPlayer,
    /// Equal scores end in a draw.
    Draw,
}

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Dots per side.
    pub size: usize,

    /// Resolution of equal final scores.
    pub tie_break: TieBreak,
}

impl BoardConfig {
    /// Create a configuration for an `size × size` grid of dots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the tie-break rule.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Number of boxes a game with this configuration has.
    #[must_use]
    pub fn box_count(&self) -> usize {
        let cells = self.size.saturating_sub(1);
        cells.saturating_mul(cells)
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.size)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            tie_break: TieBreak::default(),
        }
    }
}
