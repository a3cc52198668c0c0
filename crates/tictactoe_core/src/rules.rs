//! Win and tie detection for the 3x3 board.

use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Orientation of a completed winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// A column (top to bottom).
    Vertical,
    /// A row (left to right).
    Horizontal,
    /// Bottom-left to top-right diagonal (cells 2-4-6).
    DiagonalUp,
    /// Top-left to bottom-right diagonal (cells 0-4-8).
    DiagonalDown,
}

/// A completed winning line, identified by its middle cell and orientation.
///
/// The renderer uses the center and direction to place the strike-through
/// overlay; [`WinLine::cells`] recovers the full triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    center: usize,
    direction: LineDirection,
}

impl WinLine {
    /// Creates a win line from its middle cell and orientation.
    pub fn new(center: usize, direction: LineDirection) -> Self {
        Self { center, direction }
    }

    /// The middle cell of the line.
    pub fn center(&self) -> usize {
        self.center
    }

    /// The orientation of the line.
    pub fn direction(&self) -> LineDirection {
        self.direction
    }

    /// The three cell indices making up the line, in board order.
    pub fn cells(&self) -> [usize; 3] {
        match self.direction {
            LineDirection::Horizontal => [self.center - 1, self.center, self.center + 1],
            LineDirection::Vertical => [self.center - 3, self.center, self.center + 3],
            LineDirection::DiagonalDown => [0, 4, 8],
            LineDirection::DiagonalUp => [2, 4, 6],
        }
    }
}

/// Outcome of evaluating the board after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The current mark completed a line.
    Win(WinLine),
    /// Board full with no line completed.
    Tie,
    /// Game continues.
    Ongoing,
}

/// The 8 win conditions with their center cell and orientation, in the
/// order they are checked: rows, columns, then diagonals.
const LINES: [([usize; 3], usize, LineDirection); 8] = [
    ([0, 1, 2], 1, LineDirection::Horizontal),
    ([3, 4, 5], 4, LineDirection::Horizontal),
    ([6, 7, 8], 7, LineDirection::Horizontal),
    ([0, 3, 6], 3, LineDirection::Vertical),
    ([1, 4, 7], 4, LineDirection::Vertical),
    ([2, 5, 8], 5, LineDirection::Vertical),
    ([0, 4, 8], 4, LineDirection::DiagonalDown),
    ([2, 4, 6], 4, LineDirection::DiagonalUp),
];

/// Checks whether `mark` has completed a line, or the board has filled up.
///
/// Pure function of the board, the mark that just moved, and the turn
/// count. Lines are checked in a fixed order (rows, columns, diagonals)
/// and the first match wins. A tie is only reported on the ninth turn.
pub fn check_result(board: &Board, mark: Mark, turn_count: u32) -> RoundResult {
    let occupied = Cell::Occupied(mark);
    for (cells, center, direction) in LINES {
        if cells.iter().all(|&pos| board.get(pos) == Some(occupied)) {
            return RoundResult::Win(WinLine::new(center, direction));
        }
    }

    if turn_count == 9 {
        RoundResult::Tie
    } else {
        RoundResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_line_recovers_member_cells() {
        assert_eq!(
            WinLine::new(1, LineDirection::Horizontal).cells(),
            [0, 1, 2]
        );
        assert_eq!(WinLine::new(5, LineDirection::Vertical).cells(), [2, 5, 8]);
        assert_eq!(
            WinLine::new(4, LineDirection::DiagonalDown).cells(),
            [0, 4, 8]
        );
        assert_eq!(
            WinLine::new(4, LineDirection::DiagonalUp).cells(),
            [2, 4, 6]
        );
    }

    #[test]
    fn empty_board_is_ongoing() {
        let board = Board::new();
        assert_eq!(check_result(&board, Mark::X, 1), RoundResult::Ongoing);
    }
}
