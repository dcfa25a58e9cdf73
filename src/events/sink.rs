//! Event delivery.
//!
//! The engine pushes events into an [`EventSink`] passed by the caller,
//! so the front end decides whether to render them immediately, queue
//! them for an animation, or ignore them.

use super::event::GameEvent;

/// Receiver for game events.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: GameEvent);
}

/// Any `FnMut(&GameEvent)` closure is a sink.
impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn emit(&mut self, event: GameEvent) {
        self(&event);
    }
}

/// A sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// A sink that records events in emission order.
///
/// ## Example
///
/// ```
/// use dots_and_boxes::core::{BoardConfig, Dot, GameState};
/// use dots_and_boxes::events::{EventLog, GameEvent};
///
/// let mut game = GameState::new(BoardConfig::default()).unwrap();
/// let mut log = EventLog::new();
///
/// game.pick_dot(Dot::new(0, 0), &mut log).unwrap();
/// assert_eq!(log.events(), &[GameEvent::SelectionStarted(Dot::new(0, 0))]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|&e| predicate(e)).count()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dot, Player};

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.emit(GameEvent::SelectionStarted(Dot::new(0, 0)));
        log.emit(GameEvent::SelectionCleared);
        log.emit(GameEvent::TurnChanged(Player::Two));

        assert_eq!(log.len(), 3);
        assert_eq!(log.events()[1], GameEvent::SelectionCleared);
        assert_eq!(log.count(|e| matches!(e, GameEvent::TurnChanged(_))), 1);
    }

    #[test]
    fn test_event_log_drain() {
        let mut log = EventLog::new();
        log.emit(GameEvent::SelectionCleared);

        let drained = log.drain();
        assert_eq!(drained, vec![GameEvent::SelectionCleared]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &GameEvent| seen.push(event.name());
            sink.emit(GameEvent::SelectionCleared);
            sink.emit(GameEvent::TurnChanged(Player::One));
        }
        assert_eq!(seen, vec!["selection_cleared", "turn_changed"]);
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink;
        sink.emit(GameEvent::SelectionCleared);
    }
}
