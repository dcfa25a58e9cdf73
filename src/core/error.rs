//! Error types.
//!
//! Every rejected move is a `MoveError::InvalidMove` carrying the reason.
//! Rejections are always recoverable: the pending selection is cleared
//! and nothing else about the game changes.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::topology::{Dot, Edge};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    /// The second pick repeated the first.
    #[display("dot {} was picked twice", _0)]
    SameDot(Dot),

    /// The two picks are not grid neighbours.
    #[display("dots {} and {} are not adjacent", _0, _1)]
    NotAdjacent(Dot, Dot),

    /// The edge has already been drawn.
    #[display("edge {} is already claimed", _0)]
    AlreadyClaimed(Edge),

    /// The dot is not on the board.
    #[display("dot {} is off the board", _0)]
    OutOfBounds(Dot),

    /// Every box is claimed; the game accepts no more moves.
    #[display("the game is over")]
    GameFinished,
}

/// Error returned when a pick or claim is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MoveError {
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMoveReason),
}

impl MoveError {
    /// The reason the move was rejected.
    #[must_use]
    pub const fn reason(&self) -> InvalidMoveReason {
        match self {
            MoveError::InvalidMove(reason) => *reason,
        }
    }
}

impl std::error::Error for MoveError {}

impl From<InvalidMoveReason> for MoveError {
    fn from(reason: InvalidMoveReason) -> Self {
        MoveError::InvalidMove(reason)
    }
}

/// Error returned when a board configuration is unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Fewer than two dots per side leaves no boxes to claim.
    #[display("board size {} is too small (need at least 2 dots per side)", size)]
    BoardTooSmall { size: usize },

    /// Too many dots per side for the board's counts to stay in range.
    #[display("board size {} is too large (at most {} dots per side)", size, max)]
    BoardTooLarge { size: usize, max: usize },
}
