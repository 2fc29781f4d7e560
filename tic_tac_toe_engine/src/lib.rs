//! Game-state engine for a local two-player tic-tac-toe session.
//!
//! [`GameEngine`] owns the board, the turn and both players' tallies, and
//! reports every change through an [`EventSink`]. It has no rendering
//! dependencies, so a GUI, a terminal front end or a test can drive it alike.

pub mod game;

pub use game::engine::GameEngine;
pub use game::error::MoveError;
pub use game::message::{EventSink, FnSink, GameEvent};
pub use game::models::{
    Board, Mark, Orientation, Player, RoundOutcome, WinningLine, BOARD_SIZE, DEFAULT_NAME_O,
    DEFAULT_NAME_X, WINNING_LINES,
};
