//! Claim history.
//!
//! Every resolved edge claim appends one `ClaimRecord`. The history is
//! append-only: there is no undo.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use super::topology::{Edge, GridBox};

/// A resolved edge claim.
///
/// Used for:
/// - Replaying a game into a fresh state
/// - Debugging and logging
/// - Letting a front end redraw the board from scratch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Position of this claim in the game (starts at 0).
    pub sequence: usize,

    /// The player who drew the edge.
    pub player: Player,

    /// The edge drawn.
    pub edge: Edge,

    /// Boxes this claim completed (0, 1 or 2).
    pub completed: SmallVec<[GridBox; 2]>,
}

impl ClaimRecord {
    /// Create a new claim record.
    #[must_use]
    pub fn new(sequence: usize, player: Player, edge: Edge, completed: &[GridBox]) -> Self {
        Self {
            sequence,
            player,
            edge,
            completed: SmallVec::from_slice(completed),
        }
    }

    /// True if the claim completed at least one box.
    #[must_use]
    pub fn scored(&self) -> bool {
        !self.completed.is_empty()
    }
}
