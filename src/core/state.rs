//! Game state and the claim protocol.
//!
//! ## Selection
//!
//! Players claim an edge with two picks. The first pick is held as the
//! pending selection; the second pick either resolves into an edge claim
//! or is rejected. Either way the pending selection is cleared.
//!
//! ## Claims
//!
//! A successful claim:
//! 1. records the edge for the current player
//! 2. completes any box the edge closed, scoring it for that player
//! 3. keeps the turn if a box was completed, passes it otherwise
//! 4. ends the game once every box is claimed
//!
//! Events are emitted to the caller's [`EventSink`] in that order.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument, warn};

use super::config::BoardConfig;
use super::error::{ConfigError, InvalidMoveReason, MoveError};
use super::player::{Player, PlayerMap};
use super::record::ClaimRecord;
use super::topology::{BoardTopology, Dot, Edge, GridBox};
use crate::events::{EventSink, GameEvent};
use crate::rules::{self, ClaimOutcome, GameResult, GameStatus, PickOutcome};

/// Complete state of one game.
///
/// Mutated only through [`pick_dot`](Self::pick_dot),
/// [`claim_edge`](Self::claim_edge) and
/// [`cancel_selection`](Self::cancel_selection).
#[derive(Clone, Debug)]
pub struct GameState {
    config: BoardConfig,
    topology: BoardTopology,

    /// Whose pick it is. After game over, the player who made the last claim.
    turn: Player,

    /// Boxes completed per player.
    scores: PlayerMap<u32>,

    /// Every drawn edge with the player who drew it.
    claimed_edges: FxHashMap<Edge, Player>,

    /// Every completed box with the player who completed it.
    claimed_boxes: FxHashMap<GridBox, Player>,

    /// First pick awaiting a second one.
    pending_selection: Option<Dot>,

    /// Set once every box is claimed.
    result: Option<GameResult>,

    /// One record per resolved claim.
    history: Vector<ClaimRecord>,
}

impl GameState {
    /// Create a new game. Player one moves first.
    #[instrument]
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let topology = BoardTopology::new(config.size)?;

        Ok(Self {
            config,
            topology,
            turn: Player::One,
            scores: PlayerMap::with_default(),
            claimed_edges: FxHashMap::default(),
            claimed_boxes: FxHashMap::default(),
            pending_selection: None,
            result: None,
            history: Vector::new(),
        })
    }

    /// Create a new game on an `size × size` grid with default rules.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        Self::new(BoardConfig::new(size))
    }

    /// Replay a sequence of claims into a fresh game.
    ///
    /// Events are discarded. Stops at the first rejected claim.
    pub fn replay(config: BoardConfig, edges: &[Edge]) -> Result<Self, ReplayError> {
        let mut state = Self::new(config).map_err(ReplayError::Config)?;
        let mut sink = crate::events::NullSink;
        for (index, &edge) in edges.iter().enumerate() {
            state
                .claim_edge(edge, &mut sink)
                .map_err(|error| ReplayError::Move { index, error })?;
        }
        Ok(state)
    }

    // === Queries ===

    /// The configuration the game was built with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The board geometry.
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// Whose pick it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Scores for both players.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// A single player's score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// The pending first pick, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<Dot> {
        self.pending_selection
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::GameOver(result),
            None => GameStatus::InProgress(self.turn),
        }
    }

    /// Check if every box is claimed.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Check if an edge has been drawn.
    #[must_use]
    pub fn is_claimed(&self, edge: Edge) -> bool {
        self.claimed_edges.contains_key(&edge)
    }

    /// The player who drew an edge.
    #[must_use]
    pub fn edge_owner(&self, edge: Edge) -> Option<Player> {
        self.claimed_edges.get(&edge).copied()
    }

    /// The player who completed a box.
    #[must_use]
    pub fn box_owner(&self, grid_box: GridBox) -> Option<Player> {
        self.claimed_boxes.get(&grid_box).copied()
    }

    /// Number of edges drawn.
    #[must_use]
    pub fn claimed_edge_count(&self) -> usize {
        self.claimed_edges.len()
    }

    /// Number of boxes completed.
    #[must_use]
    pub fn claimed_box_count(&self) -> usize {
        self.claimed_boxes.len()
    }

    /// Every edge still available to claim, in [`BoardTopology::edges`] order.
    pub fn unclaimed_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.topology
            .edges()
            .filter(move |edge| !self.claimed_edges.contains_key(edge))
    }

    /// Every resolved claim, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ClaimRecord> {
        &self.history
    }

    // === Mutation ===

    /// Handle one dot pick.
    ///
    /// The first pick is stored and reported with `SelectionStarted`. The
    /// second pick clears the selection and either claims the edge between
    /// the two dots or fails with `InvalidMove` (same dot, not adjacent,
    /// already claimed). A rejected pick changes nothing but the selection.
    #[instrument(skip(self, sink), fields(turn = %self.turn))]
    pub fn pick_dot<S>(&mut self, dot: Dot, sink: &mut S) -> Result<PickOutcome, MoveError>
    where
        S: EventSink + ?Sized,
    {
        if self.is_over() {
            return Err(self.reject(InvalidMoveReason::GameFinished, sink));
        }

        let Some(first) = self.pending_selection else {
            if !self.topology.contains(dot) {
                return Err(self.reject(InvalidMoveReason::OutOfBounds(dot), sink));
            }
            debug!(%dot, "first pick");
            self.pending_selection = Some(dot);
            sink.emit(GameEvent::SelectionStarted(dot));
            return Ok(PickOutcome::AwaitingSecondPick(dot));
        };

        let edge = match self.validate_pair(first, dot) {
            Ok(edge) => edge,
            Err(reason) => return Err(self.reject(reason, sink)),
        };

        self.clear_selection(sink);
        Ok(PickOutcome::Claimed(self.apply_claim(edge, sink)))
    }

    /// Claim an edge directly, bypassing the two-pick gesture.
    ///
    /// Any pending selection is dropped first (emitting `SelectionCleared`),
    /// whether or not the claim succeeds, so the turn never changes while a
    /// pick is outstanding.
    #[instrument(skip(self, sink), fields(turn = %self.turn))]
    pub fn claim_edge<S>(&mut self, edge: Edge, sink: &mut S) -> Result<ClaimOutcome, MoveError>
    where
        S: EventSink + ?Sized,
    {
        if self.is_over() {
            return Err(self.reject(InvalidMoveReason::GameFinished, sink));
        }

        let edge = match self.validate_pair(edge.first(), edge.second()) {
            Ok(edge) => edge,
            Err(reason) => return Err(self.reject(reason, sink)),
        };

        self.clear_selection(sink);
        Ok(self.apply_claim(edge, sink))
    }

    /// Drop a pending first pick. Returns the dropped dot.
    pub fn cancel_selection<S>(&mut self, sink: &mut S) -> Option<Dot>
    where
        S: EventSink + ?Sized,
    {
        let dropped = self.pending_selection;
        self.clear_selection(sink);
        dropped
    }

    // === Internals ===

    /// Check that two dots form a claimable edge.
    fn validate_pair(&self, first: Dot, second: Dot) -> Result<Edge, InvalidMoveReason> {
        for dot in [first, second] {
            if !self.topology.contains(dot) {
                return Err(InvalidMoveReason::OutOfBounds(dot));
            }
        }
        if first == second {
            return Err(InvalidMoveReason::SameDot(first));
        }
        if !self.topology.is_adjacent(first, second) {
            return Err(InvalidMoveReason::NotAdjacent(first, second));
        }

        let edge = Edge::new(first, second);
        if self.claimed_edges.contains_key(&edge) {
            return Err(InvalidMoveReason::AlreadyClaimed(edge));
        }
        Ok(edge)
    }

    /// Clear the selection and report a rejected move.
    fn reject<S>(&mut self, reason: InvalidMoveReason, sink: &mut S) -> MoveError
    where
        S: EventSink + ?Sized,
    {
        warn!(%reason, "invalid move");
        self.clear_selection(sink);
        sink.emit(GameEvent::InvalidMove(reason));
        MoveError::InvalidMove(reason)
    }

    fn clear_selection<S>(&mut self, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if self.pending_selection.take().is_some() {
            sink.emit(GameEvent::SelectionCleared);
        }
    }

    /// Record a validated edge and resolve its consequences.
    fn apply_claim<S>(&mut self, edge: Edge, sink: &mut S) -> ClaimOutcome
    where
        S: EventSink + ?Sized,
    {
        let player = self.turn;
        self.claimed_edges.insert(edge, player);
        debug!(%edge, %player, "edge claimed");
        sink.emit(GameEvent::EdgeClaimed { edge, player });

        let completed =
            rules::completed_by(&self.topology, edge, &self.claimed_edges, &self.claimed_boxes);
        for &grid_box in &completed {
            debug_assert!(self.topology.contains_box(grid_box));
            self.claimed_boxes.insert(grid_box, player);
            self.scores[player] += 1;
            debug!(%grid_box, %player, "box completed");
            sink.emit(GameEvent::BoxCompleted { grid_box, player });
        }
        if !completed.is_empty() {
            sink.emit(GameEvent::ScoreChanged(self.scores.clone()));
        }

        let next = rules::next_turn(player, completed.len());
        if next != player {
            self.turn = next;
            sink.emit(GameEvent::TurnChanged(next));
        }

        let sequence = self.history.len();
        self.history
            .push_back(ClaimRecord::new(sequence, player, edge, &completed));

        if self.claimed_boxes.len() == self.topology.box_count() {
            let result = rules::resolve_winner(&self.scores, self.config.tie_break);
            info!(?result, scores = %self.scores, "game over");
            self.result = Some(result);
            sink.emit(GameEvent::GameOver(result));
        }

        debug_assert!(self.invariants_hold(), "game invariants violated");

        ClaimOutcome {
            edge,
            player,
            completed,
            next_turn: self.turn,
            result: self.result,
        }
    }

    /// Check the bookkeeping invariants.
    ///
    /// - scores sum to the number of claimed boxes
    /// - no more boxes than the board has
    /// - every claimed box has all four edges drawn
    /// - one history record per drawn edge
    /// - the game is over iff every box is claimed
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let claimed = self.claimed_boxes.len();

        let scores_match = self.scores.total() as usize == claimed;
        if !scores_match {
            warn!(total = self.scores.total(), claimed, "scores do not match claimed boxes");
        }

        let within_board = claimed <= self.topology.box_count();
        if !within_board {
            warn!(claimed, "more boxes claimed than exist");
        }

        let boxes_complete = self
            .claimed_boxes
            .keys()
            .all(|&grid_box| rules::is_complete(grid_box, &self.claimed_edges));
        if !boxes_complete {
            warn!("claimed box with an undrawn edge");
        }

        let history_matches = self.history.len() == self.claimed_edges.len();
        if !history_matches {
            warn!(
                history = self.history.len(),
                edges = self.claimed_edges.len(),
                "history out of step with claimed edges"
            );
        }

        let terminal_matches = self.is_over() == (claimed == self.topology.box_count());
        if !terminal_matches {
            warn!(claimed, over = self.is_over(), "terminal status out of step");
        }

        scores_match && within_board && boxes_complete && history_matches && terminal_matches
    }
}

/// Error returned by [`GameState::replay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The configuration was rejected.
    #[display("{}", _0)]
    Config(ConfigError),

    /// A claim in the sequence was rejected.
    #[display("claim {} rejected: {}", index, error)]
    Move {
        index: usize,
        #[error(source)]
        error: MoveError,
    },
}
