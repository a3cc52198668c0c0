//! Terminal UI for tic-tac-toe.
//!
//! A mouse-driven rendition of the classic game: a start screen, the live
//! grid, an options overlay, a scrollable history browser, and a read-only
//! replay of past games. Screens form a small state machine driven by the
//! [`Controller`]; the game rules themselves live in `tictactoe_core`.

#![warn(missing_docs)]

pub mod controller;
pub mod layout;
pub mod screen;
pub mod screens;
pub mod ui;

pub use controller::{ActiveScreen, Controller};
pub use screen::{Screen, ScreenTransition};
