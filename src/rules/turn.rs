//! Turn continuation and end-of-game resolution.

use tracing::instrument;

use super::outcome::GameResult;
use crate::core::{Player, PlayerMap, TieBreak};

/// Whose pick follows a resolved claim that completed `completed` boxes.
///
/// Completing any number of boxes keeps the turn; otherwise it passes.
#[must_use]
pub fn next_turn(current: Player, completed: usize) -> Player {
    if completed > 0 {
        current
    } else {
        current.other()
    }
}

/// Decide the winner from final scores.
///
/// The strictly higher score wins. Equal scores go to player one under
/// [`TieBreak::FavorFirstPlayer`] and end drawn under [`TieBreak::Draw`].
#[instrument(level = "debug")]
pub fn resolve_winner(scores: &PlayerMap<u32>, tie_break: TieBreak) -> GameResult {
    let (one, two) = (scores[Player::One], scores[Player::Two]);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => match tie_break {
            TieBreak::FavorFirstPlayer => GameResult::Winner(Player::One),
            TieBreak::Draw => GameResult::Draw,
        },
    }
}
