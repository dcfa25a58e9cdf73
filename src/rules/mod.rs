//! The rules of dots and boxes, as pure functions over board state.
//!
//! - Box completion: which boxes a new edge completes
//! - Turn continuation: completing a box keeps the turn
//! - End of game: winner resolution and tie-break
//!
//! [`GameState`](crate::core::GameState) calls into these; nothing here
//! mutates state.

pub mod completion;
pub mod outcome;
pub mod turn;

pub use completion::{completed_boxes_full_scan, completed_by, is_complete};
pub use outcome::{ClaimOutcome, GameResult, GameStatus, PickOutcome};
pub use turn::{next_turn, resolve_winner};
