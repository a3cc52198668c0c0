//! A play session: the live game plus the history of completed ones.

use crate::game::{Game, PlaceOutcome};
use crate::history::{HistoryEntry, HistoryLog, Outcome};
use crate::rules::WinLine;
use crate::types::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// What a [`Session::place_mark`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Nothing happened: the click missed, the cell was occupied, or no
    /// game was ongoing.
    Refused,
    /// A mark was placed and the game continues.
    Marked {
        /// The mark that was placed.
        mark: Mark,
    },
    /// The game ended. The entry has already been recorded to history and
    /// the live game reset; the entry carries the final board for display.
    Finished {
        /// The recorded history entry for the finished game.
        entry: HistoryEntry,
        /// The winning line, `None` on a tie.
        win: Option<WinLine>,
    },
}

/// The live game together with the in-memory log of finished games.
///
/// `Session` runs the game-over flow: when a placement ends the game it
/// snapshots the final board into a [`HistoryEntry`], records it, and
/// resets the live game, all before returning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: Game,
    history: HistoryLog,
}

impl Session {
    /// Creates a session with no game in play and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game, discarding any game in play.
    #[instrument(skip(self, rng))]
    pub fn start_game(&mut self, rng: &mut impl Rng) {
        self.game.start(rng);
        info!(first = ?self.game.turn(), "New game started");
    }

    /// Starts a fresh game with a chosen first mark.
    #[instrument(skip(self))]
    pub fn start_game_as(&mut self, first: Mark) {
        self.game.start_as(first);
    }

    /// Attempts to place the current mark at `index`, running the
    /// game-over flow on a terminal result.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize) -> Placement {
        match self.game.place(index) {
            PlaceOutcome::Refused => Placement::Refused,
            PlaceOutcome::Marked(mark) => Placement::Marked { mark },
            PlaceOutcome::Won { mark, line } => {
                self.finish(Outcome::Winner(mark), Some(line))
            }
            PlaceOutcome::Tied => self.finish(Outcome::Tie, None),
        }
    }

    /// Records the finished game and resets the board.
    fn finish(&mut self, outcome: Outcome, win: Option<WinLine>) -> Placement {
        let entry = HistoryEntry::new(
            self.game.board().clone(),
            outcome,
            self.game.turn_count(),
        );
        self.history.record(entry.clone());
        self.game.reset();
        info!(%outcome, games = self.history.len(), "Game over");
        Placement::Finished { entry, win }
    }

    /// The live game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The log of completed games.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Mutable access to the log, for cursor movement while browsing.
    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }
}
