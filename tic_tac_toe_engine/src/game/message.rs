use serde::{Deserialize, Serialize};

use super::models::{Mark, WinningLine};

/// Notifications the engine sends to its presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    SessionStarted {
        name_x: String,
        name_o: String,
    },
    TurnChanged {
        mark: Mark,
        name: String,
    },
    Won {
        mark: Mark,
        name: String,
        line: WinningLine,
    },
    Draw,
    ScoreUpdated {
        mark: Mark,
        score: u32,
    },
    SessionEnded,
}

pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Queues events for the collaborator to drain.
impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Adapts a closure into an [`EventSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn notify(&mut self, event: GameEvent) {
        (self.0)(event)
    }
}
