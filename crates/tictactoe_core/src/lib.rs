//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything about the game that does not touch a
//! terminal: the board and marks, win/tie detection, turn management, and
//! the in-memory history of completed games. The TUI crate consumes it
//! through [`Session`], which bundles the live [`Game`] with the
//! [`HistoryLog`] and runs the game-over flow.

#![warn(missing_docs)]

mod game;
mod history;
mod rules;
mod session;
mod types;

pub use game::{Game, PlaceOutcome};
pub use history::{HistoryEntry, HistoryLog, Outcome, VISIBLE_SLOTS};
pub use rules::{LineDirection, RoundResult, WinLine, check_result};
pub use session::{Placement, Session};
pub use types::{Board, Cell, Mark};
