//! Core engine types: players, board geometry, configuration, state.
//!
//! `BoardTopology` answers pure geometric questions; `GameState` owns
//! everything that changes during a game.

pub mod config;
pub mod error;
pub mod player;
pub mod record;
pub mod state;
pub mod topology;

pub use config::{BoardConfig, TieBreak, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::{ConfigError, InvalidMoveReason, MoveError};
pub use player::{Player, PlayerMap};
pub use record::ClaimRecord;
pub use state::{GameState, ReplayError};
pub use topology::{BoardTopology, Dot, Edge, GridBox};
