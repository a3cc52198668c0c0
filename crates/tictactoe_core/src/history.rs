//! In-memory log of completed games with a scroll cursor for browsing.

use crate::types::{Board, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of history entries visible at once when browsing.
pub const VISIBLE_SLOTS: usize = 5;

/// How a completed game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// The given mark completed a line.
    #[display("{_0} won")]
    Winner(Mark),
    /// Board filled with no line.
    #[display("tie game")]
    Tie,
}

/// A completed game: the final board, how it ended, and in how many turns.
///
/// Created once at game over and immutable afterwards. The board is an
/// owned snapshot, independent of the live game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    final_board: Board,
    outcome: Outcome,
    turn_count: u32,
}

impl HistoryEntry {
    /// Creates an entry from a finished game's state.
    pub fn new(final_board: Board, outcome: Outcome, turn_count: u32) -> Self {
        Self {
            final_board,
            outcome,
            turn_count,
        }
    }

    /// The board as it stood when the game ended.
    pub fn final_board(&self) -> &Board {
        &self.final_board
    }

    /// How the game ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Turns taken to reach the outcome.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
}

/// Append-only log of completed games, oldest first, with a cursor for
/// paging back through a [`VISIBLE_SLOTS`]-sized window.
///
/// The cursor counts back from the most recent entry: 0 means the window
/// starts at the latest game, larger values page further into the past.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed game to the log.
    #[instrument(skip(self, entry))]
    pub fn record(&mut self, entry: HistoryEntry) {
        debug!(outcome = %entry.outcome(), turns = entry.turn_count(), "Recording game");
        self.entries.push(entry);
    }

    /// Number of recorded games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no games have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at the given absolute index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Up to [`VISIBLE_SLOTS`] entries starting `offset` games back from
    /// the most recent, walking backward in time.
    ///
    /// Returns fewer entries when the history is short, and none at all
    /// when the offset has scrolled past the oldest game; neither is an
    /// error.
    pub fn window_at(&self, offset: usize) -> Vec<&HistoryEntry> {
        let len = self.entries.len();
        if offset >= len {
            return Vec::new();
        }
        let newest = len - 1 - offset;
        self.entries[..=newest]
            .iter()
            .rev()
            .take(VISIBLE_SLOTS)
            .collect()
    }

    /// The window at the current cursor position.
    pub fn visible_window(&self) -> Vec<&HistoryEntry> {
        self.window_at(self.cursor)
    }

    /// Absolute entry index for a slot of the current window, if that slot
    /// is occupied. Slot 0 is the most recent entry of the window.
    pub fn slot_index(&self, slot: usize) -> Option<usize> {
        if slot >= VISIBLE_SLOTS {
            return None;
        }
        let back = self.cursor.checked_add(slot)?;
        let len = self.entries.len();
        if back >= len { None } else { Some(len - 1 - back) }
    }

    /// Moves the window one game further into the past.
    ///
    /// No upper bound is enforced; an over-scrolled cursor just yields an
    /// empty window until scrolled back.
    #[instrument(skip(self))]
    pub fn scroll_older(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Moves the window one game toward the present, stopping at the most
    /// recent page.
    #[instrument(skip(self))]
    pub fn scroll_newer(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Resets the cursor to the most recent page.
    #[instrument(skip(self))]
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor offset (0 = most recent page).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
