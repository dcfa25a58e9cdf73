//! Game status and the results of picks and claims.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Dot, Edge, GridBox, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores under [`TieBreak::Draw`](crate::core::TieBreak::Draw).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Where the game stands between picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting on the given player.
    InProgress(Player),
    /// Every box is claimed.
    GameOver(GameResult),
}

/// What a single resolved edge claim did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    /// The edge drawn.
    pub edge: Edge,

    /// The player who drew it.
    pub player: Player,

    /// Boxes completed by this edge, in completion order.
    pub completed: SmallVec<[GridBox; 2]>,

    /// Whose pick comes next (the same player after a completion).
    pub next_turn: Player,

    /// Set when this claim ended the game.
    pub result: Option<GameResult>,
}

impl ClaimOutcome {
    /// True if the player keeps the turn.
    #[must_use]
    pub fn extra_turn(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// What a single `pick_dot` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickOutcome {
    /// First pick stored; waiting for the second.
    AwaitingSecondPick(Dot),
    /// The second pick resolved into an edge claim.
    Claimed(ClaimOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert_eq!(result.winner(), Some(Player::Two));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::One));
        assert!(!draw.is_winner(Player::Two));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_extra_turn() {
        let outcome = ClaimOutcome {
            edge: Edge::new((0, 0), (0, 1)),
            player: Player::One,
            completed: SmallVec::new(),
            next_turn: Player::Two,
            result: None,
        };
        assert!(!outcome.extra_turn());

        let scored = ClaimOutcome {
            completed: SmallVec::from_slice(&[GridBox::new(0, 0)]),
            next_turn: Player::One,
            ..outcome
        };
        assert!(scored.extra_turn());
    }
}
