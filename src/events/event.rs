//! Game event types.
//!
//! Events are what the engine tells its front end. The engine never
//! draws anything; it reports what changed, in order, and the front end
//! renders and paces it (a box-fill animation per `BoxCompleted`, say).

use serde::{Deserialize, Serialize};

use crate::core::{Dot, Edge, GridBox, InvalidMoveReason, Player, PlayerMap};
use crate::rules::GameResult;

/// A notification emitted while resolving a pick or claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A first pick is pending (highlight the dot).
    SelectionStarted(Dot),

    /// The pending pick was consumed or dropped (remove the highlight).
    SelectionCleared,

    /// A pick or claim was rejected. Nothing else changed.
    InvalidMove(InvalidMoveReason),

    /// An edge was drawn by `player`.
    EdgeClaimed { edge: Edge, player: Player },

    /// A box was completed by `player`. One event per box.
    BoxCompleted { grid_box: GridBox, player: Player },

    /// Scores after the latest completion.
    ScoreChanged(PlayerMap<u32>),

    /// The turn passed to this player.
    TurnChanged(Player),

    /// The last box was claimed.
    GameOver(GameResult),
}

impl GameEvent {
    /// Short name of the event kind, for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            GameEvent::SelectionStarted(_) => "selection_started",
            GameEvent::SelectionCleared => "selection_cleared",
            GameEvent::InvalidMove(_) => "invalid_move",
            GameEvent::EdgeClaimed { .. } => "edge_claimed",
            GameEvent::BoxCompleted { .. } => "box_completed",
            GameEvent::ScoreChanged(_) => "score_changed",
            GameEvent::TurnChanged(_) => "turn_changed",
            GameEvent::GameOver(_) => "game_over",
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub const fn player(&self) -> Option<Player> {
        match self {
            GameEvent::EdgeClaimed { player, .. }
            | GameEvent::BoxCompleted { player, .. }
            | GameEvent::TurnChanged(player) => Some(*player),
            GameEvent::GameOver(GameResult::Winner(player)) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::SelectionStarted(dot) => write!(f, "selected {}", dot),
            GameEvent::SelectionCleared => write!(f, "selection cleared"),
            GameEvent::InvalidMove(reason) => write!(f, "invalid move: {}", reason),
            GameEvent::EdgeClaimed { edge, player } => write!(f, "{} drew {}", player, edge),
            GameEvent::BoxCompleted { grid_box, player } => {
                write!(f, "{} completed {}", player, grid_box)
            }
            GameEvent::ScoreChanged(scores) => write!(
                f,
                "score {}-{}",
                scores[Player::One],
                scores[Player::Two]
            ),
            GameEvent::TurnChanged(player) => write!(f, "{} to move", player),
            GameEvent::GameOver(GameResult::Winner(player)) => write!(f, "{} wins", player),
            GameEvent::GameOver(GameResult::Draw) => write!(f, "draw"),
        }
    }
}
