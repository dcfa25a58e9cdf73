//! # dots-and-boxes
//!
//! A rules engine for dots and boxes: two players take turns drawing
//! edges between neighbouring dots, the player who closes a unit square
//! scores it and moves again, and the game ends when every square is
//! claimed.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: No drawing, no pointer handling, no dialogs. The
//!    engine takes dots and reports what changed as events.
//!
//! 2. **One owner**: All mutable state lives in a single `GameState`,
//!    changed only through `pick_dot`, `claim_edge` and `cancel_selection`.
//!
//! 3. **Recoverable errors**: A bad pick clears the selection and returns
//!    `MoveError::InvalidMove`; the game itself is untouched.
//!
//! ## Example
//!
//! ```
//! use dots_and_boxes::core::{BoardConfig, Dot, GameState, Player};
//! use dots_and_boxes::events::{EventLog, GameEvent};
//!
//! let mut game = GameState::new(BoardConfig::default()).unwrap();
//! let mut events = EventLog::new();
//!
//! game.pick_dot(Dot::new(0, 0), &mut events).unwrap();
//! game.pick_dot(Dot::new(0, 1), &mut events).unwrap();
//!
//! assert_eq!(game.turn(), Player::Two);
//! assert_eq!(events.events().last(), Some(&GameEvent::TurnChanged(Player::Two)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, board geometry, configuration, errors, game state
//! - `rules`: Box completion, turn continuation, winner resolution
//! - `events`: Notifications for the front end

pub mod core;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardTopology, ClaimRecord, ConfigError, Dot, Edge, GameState, GridBox,
    InvalidMoveReason, MoveError, Player, PlayerMap, ReplayError, TieBreak,
};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::rules::{ClaimOutcome, GameResult, GameStatus, PickOutcome};
