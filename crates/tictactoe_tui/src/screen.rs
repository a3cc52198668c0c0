//! Screen trait and transition type for the screen state machine.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tictactoe_core::Session;

/// The result of handling an input event on a screen.
///
/// Screens return this from their input handlers to drive the
/// [`Controller`](crate::Controller) state machine. Modal transitions
/// carry no snapshot data themselves; the controller moves the covered
/// screen into (and back out of) the modal variant when applying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Start a fresh game and enter the game screen.
    StartGame,
    /// Open the options overlay above the game screen.
    OpenOptions,
    /// Dismiss the options overlay, returning to the game screen.
    CloseOptions,
    /// Open the game-history browser above the options overlay.
    OpenHistory,
    /// Dismiss the history browser, returning to the options overlay.
    CloseHistory,
    /// Show the final board of a recorded game.
    OpenPastGame {
        /// Absolute index of the entry in the history log.
        entry_index: usize,
    },
    /// Leave the past-game view, returning to the history browser.
    ClosePastGame,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its view state, renders its UI, and handles input.
/// Click handlers receive the full terminal area so hit-testing can use
/// the same layout arithmetic the renderer used.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session);

    /// Handles a key event and returns the resulting transition.
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition;

    /// Handles a left-click at `(column, row)` within `area` and returns
    /// the resulting transition. Clicks outside every recognized region
    /// are a no-op, never an error.
    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        session: &mut Session,
    ) -> ScreenTransition;
}
