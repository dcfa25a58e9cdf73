//! Whole-game scenarios driven through the two-pick gesture.

use dots_and_boxes::core::{
    BoardConfig, Dot, Edge, GameState, GridBox, InvalidMoveReason, Player, TieBreak,
};
use dots_and_boxes::events::{EventLog, GameEvent};
use dots_and_boxes::rules::{GameResult, GameStatus, PickOutcome};

/// Draw an edge with two picks.
fn draw(
    game: &mut GameState,
    a: (usize, usize),
    b: (usize, usize),
    log: &mut EventLog,
) -> PickOutcome {
    game.pick_dot(Dot::from(a), log).unwrap();
    game.pick_dot(Dot::from(b), log).unwrap()
}

fn count_box_events(log: &EventLog) -> usize {
    log.count(|e| matches!(e, GameEvent::BoxCompleted { .. }))
}

/// A 4x4 game ending 5-4 to player one.
const FIVE_FOUR: [((usize, usize), (usize, usize)); 24] = [
    ((0, 2), (1, 2)),
    ((0, 0), (0, 1)),
    ((1, 1), (2, 1)),
    ((2, 1), (2, 2)),
    ((2, 0), (2, 1)),
    ((3, 2), (3, 3)),
    ((2, 2), (3, 2)),
    ((2, 1), (3, 1)),
    ((3, 1), (3, 2)),
    ((1, 1), (1, 2)),
    ((0, 2), (0, 3)),
    ((2, 0), (3, 0)),
    ((1, 0), (1, 1)),
    ((1, 3), (2, 3)),
    ((1, 2), (1, 3)),
    ((1, 2), (2, 2)),
    ((3, 0), (3, 1)),
    ((2, 3), (3, 3)),
    ((0, 3), (1, 3)),
    ((1, 0), (2, 0)),
    ((2, 2), (2, 3)),
    ((0, 1), (0, 2)),
    ((0, 1), (1, 1)),
    ((0, 0), (1, 0)),
];

/// A 3x3 game ending 2-2.
const TWO_TWO: [((usize, usize), (usize, usize)); 12] = [
    ((0, 1), (0, 2)),
    ((1, 0), (2, 0)),
    ((0, 2), (1, 2)),
    ((2, 1), (2, 2)),
    ((1, 1), (2, 1)),
    ((1, 0), (1, 1)),
    ((1, 1), (1, 2)),
    ((0, 1), (1, 1)),
    ((2, 0), (2, 1)),
    ((0, 0), (0, 1)),
    ((1, 2), (2, 2)),
    ((0, 0), (1, 0)),
];

#[test]
fn test_player_one_completes_top_left_box() {
    let mut game = GameState::new(BoardConfig::default()).unwrap();
    let mut log = EventLog::new();

    // Player two answers each quiet move along the bottom row.
    draw(&mut game, (0, 0), (0, 1), &mut log);
    draw(&mut game, (3, 2), (3, 3), &mut log);
    draw(&mut game, (0, 1), (1, 1), &mut log);
    draw(&mut game, (3, 1), (3, 2), &mut log);
    draw(&mut game, (1, 0), (1, 1), &mut log);
    draw(&mut game, (3, 0), (3, 1), &mut log);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(count_box_events(&log), 0);

    let outcome = draw(&mut game, (0, 0), (1, 0), &mut log);

    let PickOutcome::Claimed(claim) = outcome else {
        panic!("second pick should claim");
    };
    assert_eq!(claim.completed.as_slice(), &[GridBox::new(0, 0)]);
    assert_eq!(game.box_owner(GridBox::new(0, 0)), Some(Player::One));
    assert_eq!(game.score(Player::One), 1);
    assert_eq!(game.score(Player::Two), 0);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.status(), GameStatus::InProgress(Player::One));
    assert_eq!(count_box_events(&log), 1);
}

#[test]
fn test_non_adjacent_pick_is_rejected() {
    let mut game = GameState::new(BoardConfig::default()).unwrap();
    let mut log = EventLog::new();

    game.pick_dot(Dot::new(0, 0), &mut log).unwrap();
    let err = game.pick_dot(Dot::new(2, 0), &mut log).unwrap_err();

    assert_eq!(
        err.reason(),
        InvalidMoveReason::NotAdjacent(Dot::new(0, 0), Dot::new(2, 0))
    );
    assert_eq!(game.pending_selection(), None);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(game.scores().total(), 0);
    assert_eq!(game.claimed_edge_count(), 0);
    assert!(log.events().contains(&GameEvent::InvalidMove(err.reason())));

    // The next pick starts a fresh selection.
    let outcome = game.pick_dot(Dot::new(2, 0), &mut log).unwrap();
    assert_eq!(outcome, PickOutcome::AwaitingSecondPick(Dot::new(2, 0)));
}

#[test]
fn test_double_completion_scores_two_and_keeps_turn() {
    let mut game = GameState::with_size(3).unwrap();
    let mut log = EventLog::new();

    // Three sides of each of the top two boxes, leaving the shared edge.
    for (a, b) in [
        ((0, 0), (0, 1)),
        ((1, 0), (1, 1)),
        ((0, 0), (1, 0)),
        ((0, 1), (0, 2)),
        ((0, 2), (1, 2)),
        ((1, 1), (1, 2)),
    ] {
        draw(&mut game, a, b, &mut log);
    }
    assert_eq!(game.turn(), Player::One);
    assert_eq!(count_box_events(&log), 0);

    log.drain();
    draw(&mut game, (0, 1), (1, 1), &mut log);

    assert_eq!(game.score(Player::One), 2);
    assert_eq!(game.turn(), Player::One);
    assert_eq!(count_box_events(&log), 2);
    assert_eq!(log.count(|e| matches!(e, GameEvent::ScoreChanged(_))), 1);
    assert_eq!(log.count(|e| matches!(e, GameEvent::TurnChanged(_))), 0);
    assert!(log.events().contains(&GameEvent::BoxCompleted {
        grid_box: GridBox::new(0, 0),
        player: Player::One,
    }));
    assert!(log.events().contains(&GameEvent::BoxCompleted {
        grid_box: GridBox::new(0, 1),
        player: Player::One,
    }));
}

#[test]
fn test_full_game_five_four() {
    let mut game = GameState::new(BoardConfig::default()).unwrap();
    let mut log = EventLog::new();

    for (i, (a, b)) in FIVE_FOUR.iter().enumerate() {
        assert!(!game.is_over(), "game ended early at claim {}", i);
        draw(&mut game, *a, *b, &mut log);
        assert_eq!(game.scores().total() as usize, game.claimed_box_count());
    }

    assert!(game.is_over());
    assert_eq!(game.claimed_box_count(), 9);
    assert_eq!(game.score(Player::One), 5);
    assert_eq!(game.score(Player::Two), 4);
    assert_eq!(game.result(), Some(GameResult::Winner(Player::One)));
    assert_eq!(count_box_events(&log), 9);
    assert_eq!(
        log.events().last(),
        Some(&GameEvent::GameOver(GameResult::Winner(Player::One)))
    );
    assert_eq!(log.count(|e| matches!(e, GameEvent::GameOver(_))), 1);
    assert_eq!(game.unclaimed_edges().count(), 0);
}

#[test]
fn test_tie_favors_player_one_by_default() {
    let mut game = GameState::with_size(3).unwrap();
    let mut log = EventLog::new();

    for (a, b) in TWO_TWO {
        draw(&mut game, a, b, &mut log);
    }

    assert_eq!(game.score(Player::One), 2);
    assert_eq!(game.score(Player::Two), 2);
    assert_eq!(game.result(), Some(GameResult::Winner(Player::One)));
    assert_eq!(
        log.events().last(),
        Some(&GameEvent::GameOver(GameResult::Winner(Player::One)))
    );
}

#[test]
fn test_tie_is_draw_when_configured() {
    let edges: Vec<Edge> = TWO_TWO.iter().map(|&(a, b)| Edge::new(a, b)).collect();
    let config = BoardConfig::new(3).with_tie_break(TieBreak::Draw);

    let game = GameState::replay(config, &edges).unwrap();

    assert_eq!(game.result(), Some(GameResult::Draw));
    assert_eq!(game.status(), GameStatus::GameOver(GameResult::Draw));
}

#[test]
fn test_no_picks_after_game_over() {
    let edges: Vec<Edge> = FIVE_FOUR.iter().map(|&(a, b)| Edge::new(a, b)).collect();
    let mut game = GameState::replay(BoardConfig::default(), &edges).unwrap();
    let mut log = EventLog::new();

    let err = game.pick_dot(Dot::new(0, 0), &mut log).unwrap_err();

    assert_eq!(err.reason(), InvalidMoveReason::GameFinished);
    assert_eq!(game.score(Player::One), 5);
    assert_eq!(game.pending_selection(), None);
}

#[test]
fn test_history_replays_to_same_state() {
    let mut game = GameState::new(BoardConfig::default()).unwrap();
    let mut log = EventLog::new();
    for (a, b) in &FIVE_FOUR[..15] {
        draw(&mut game, *a, *b, &mut log);
    }

    let edges: Vec<Edge> = game.history().iter().map(|r| r.edge).collect();
    let replayed = GameState::replay(BoardConfig::default(), &edges).unwrap();

    assert_eq!(replayed.scores(), game.scores());
    assert_eq!(replayed.turn(), game.turn());
    assert_eq!(replayed.history(), game.history());
}
