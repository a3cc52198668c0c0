//! The live game: board plus turn tracking.

use crate::rules::{RoundResult, WinLine, check_result};
use crate::types::{Board, Cell, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of a placement attempt on the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// A constraint failed (out of bounds, cell occupied, or no game
    /// ongoing). The game state is unchanged.
    Refused,
    /// The mark was placed and the game continues with the other player.
    Marked(Mark),
    /// The mark was placed and completed a winning line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// The mark was placed, the board is full, and no line was completed.
    Tied,
}

/// A tic-tac-toe game in play: the board, whose turn it is, and how many
/// turns have been taken.
///
/// Invariant: while a game is ongoing, `turn_count` equals the number of
/// occupied cells plus one, and `turn` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Option<Mark>,
    turn_count: u32,
    ongoing: bool,
}

impl Game {
    /// Creates a game that has not started yet.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: None,
            turn_count: 1,
            ongoing: false,
        }
    }

    /// Starts a fresh game: clears the board and picks the first mark
    /// uniformly at random from the supplied randomness source.
    #[instrument(skip(self, rng))]
    pub fn start(&mut self, rng: &mut impl Rng) {
        let first = if rng.gen_bool(0.5) { Mark::X } else { Mark::O };
        self.start_as(first);
    }

    /// Starts a fresh game with a chosen first mark.
    #[instrument(skip(self))]
    pub fn start_as(&mut self, first: Mark) {
        self.board = Board::new();
        self.turn = Some(first);
        self.turn_count = 1;
        self.ongoing = true;
        debug!(%first, "Game started");
    }

    /// Attempts to place the current mark at `index`.
    ///
    /// A placement is quietly refused when the index is out of bounds, the
    /// cell is occupied, or no game is ongoing; the caller is expected to
    /// pre-filter clicks with hit-testing, so a refusal is not an error.
    /// On a terminal outcome the game stops accepting moves but keeps its
    /// final board; callers snapshot it before [`Game::reset`].
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> PlaceOutcome {
        if !self.ongoing {
            return PlaceOutcome::Refused;
        }
        let Some(mark) = self.turn else {
            return PlaceOutcome::Refused;
        };
        let Some(Cell::Empty) = self.board.get(index) else {
            return PlaceOutcome::Refused;
        };

        self.board.set(index, Cell::Occupied(mark));

        match check_result(&self.board, mark, self.turn_count) {
            RoundResult::Win(line) => {
                self.ongoing = false;
                debug!(%mark, turns = self.turn_count, "Line completed");
                PlaceOutcome::Won { mark, line }
            }
            RoundResult::Tie => {
                self.ongoing = false;
                debug!("Board full with no line");
                PlaceOutcome::Tied
            }
            RoundResult::Ongoing => {
                self.turn_count += 1;
                self.turn = Some(mark.opponent());
                PlaceOutcome::Marked(mark)
            }
        }
    }

    /// Resets the game to the not-started state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is, `None` before a game starts or
    /// after one ends.
    pub fn turn(&self) -> Option<Mark> {
        self.turn
    }

    /// Returns the 1-based turn counter.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whether a game is currently in play.
    pub fn ongoing(&self) -> bool {
        self.ongoing
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
