//! Outbound notifications.
//!
//! Every state change the front end might draw is reported as a
//! [`GameEvent`] delivered to an [`EventSink`]:
//!
//! | Event              | Front end reaction                   |
//! |--------------------|--------------------------------------|
//! | `SelectionStarted` | highlight the picked dot             |
//! | `SelectionCleared` | remove the highlight                 |
//! | `InvalidMove`      | tell the user why                    |
//! | `EdgeClaimed`      | draw the line in the player's color  |
//! | `BoxCompleted`     | fill the box (one event per box)     |
//! | `ScoreChanged`     | refresh the score display            |
//! | `TurnChanged`      | show whose move it is                |
//! | `GameOver`         | announce the result, stop input      |

mod event;
mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink};
