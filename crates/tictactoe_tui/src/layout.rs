//! Layout arithmetic shared by rendering and click hit-testing.
//!
//! Every screen computes its regions from the terminal area with the pure
//! constructors in this module, so a click handler and the renderer always
//! agree on where things are.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use tictactoe_core::Board;

/// Character width of one board tile.
pub const TILE_WIDTH: u16 = 7;
/// Character height of one board tile.
pub const TILE_HEIGHT: u16 = 3;
/// Width of the 3x3 board with its two separator columns.
pub const BOARD_WIDTH: u16 = TILE_WIDTH * 3 + 2;
/// Height of the 3x3 board with its two separator rows.
pub const BOARD_HEIGHT: u16 = TILE_HEIGHT * 3 + 2;

/// Centers a `width` x `height` rect inside `area`, clamping to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Result of hit-testing a click against the board grid.
///
/// Tile 0 is the top-left corner, so "hit tile 0" must be distinguishable
/// from "hit nothing"; this enum keeps the three cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileHit {
    /// An empty tile was hit.
    Empty(usize),
    /// An occupied tile was hit.
    Occupied(usize),
    /// The click landed outside every tile.
    Miss,
}

/// The 3x3 grid: its bounding rect and the rect of each tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    area: Rect,
    tiles: [Rect; 9],
}

impl BoardLayout {
    /// Lays out the board centered inside `zone`.
    pub fn centered(zone: Rect) -> Self {
        let area = center_rect(zone, BOARD_WIDTH, BOARD_HEIGHT);
        let mut tiles = [Rect::default(); 9];
        for (i, tile) in tiles.iter_mut().enumerate() {
            let row = (i / 3) as u16;
            let col = (i % 3) as u16;
            *tile = Rect::new(
                area.x + col * (TILE_WIDTH + 1),
                area.y + row * (TILE_HEIGHT + 1),
                TILE_WIDTH,
                TILE_HEIGHT,
            );
        }
        Self { area, tiles }
    }

    /// The board's bounding rect.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The rect of the tile at `index` (0-8, row-major).
    pub fn tile(&self, index: usize) -> Rect {
        self.tiles[index]
    }

    /// The tile index under `(column, row)`, if any. Separator lines
    /// between tiles count as a miss.
    pub fn tile_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.tiles.iter().position(|tile| tile.contains(pos))
    }

    /// Hit-tests a click against the grid and the given board contents.
    pub fn hit_test(&self, column: u16, row: u16, board: &Board) -> TileHit {
        match self.tile_at(column, row) {
            Some(index) if board.is_empty(index) => TileHit::Empty(index),
            Some(index) => TileHit::Occupied(index),
            None => TileHit::Miss,
        }
    }
}

/// Regions of the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartLayout {
    /// Title banner above the play button.
    pub title: Rect,
    /// The play button.
    pub play: Rect,
}

impl StartLayout {
    /// Lays out the start screen inside `area`.
    pub fn new(area: Rect) -> Self {
        let play = center_rect(area, 22, 5);
        let title = Rect::new(area.x, play.y.saturating_sub(3), area.width, 1);
        Self { title, play }
    }
}

/// Regions of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// The 3x3 grid.
    pub board: BoardLayout,
    /// Bottom-bar section holding the turn indicator tiles.
    pub turn_zone: Rect,
    /// Bottom-bar section holding the turn counter or result caption.
    pub count_zone: Rect,
    /// The "more" button opening the options overlay.
    pub more_button: Rect,
    /// One-line help bar.
    pub help: Rect,
}

impl GameLayout {
    /// Lays out the game screen inside `area`: grid on top, info bar and
    /// help line along the bottom.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);
        let info = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);
        Self {
            board: BoardLayout::centered(chunks[0]),
            turn_zone: info[0],
            count_zone: info[1],
            more_button: center_rect(info[2], 12, 3),
            help: chunks[2],
        }
    }
}

/// Regions of the options overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsLayout {
    /// The overlay panel.
    pub container: Rect,
    /// The three option rows; only the first ("History") is wired up.
    pub items: [Rect; 3],
}

impl OptionsLayout {
    /// Lays out the overlay panel centered inside `area`.
    pub fn new(area: Rect) -> Self {
        let container = center_rect(area, area.width / 2, area.height / 2);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(container);
        Self {
            container,
            items: [rows[0], rows[1], rows[2]],
        }
    }

    /// Whether `(column, row)` lands inside the overlay panel.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.container.contains(Position::new(column, row))
    }
}

/// Regions of the history browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLayout {
    /// The browser panel.
    pub container: Rect,
    /// The five visible entry slots, most recent first.
    pub slots: [Rect; 5],
    /// Scroll-toward-present arrow, top right.
    pub up_arrow: Rect,
    /// Scroll-into-past arrow, bottom right.
    pub down_arrow: Rect,
}

impl HistoryLayout {
    /// Lays out the browser panel centered inside `area`.
    pub fn new(area: Rect) -> Self {
        let container = center_rect(area, area.width * 3 / 5, area.height * 4 / 5);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
                Constraint::Ratio(1, 5),
            ])
            .split(container);
        // The arrows sit on the panel's right edge, checked before slots
        // when routing clicks.
        let up_arrow = Rect::new(container.right().saturating_sub(4), container.y, 3, 1);
        let down_arrow = Rect::new(
            container.right().saturating_sub(4),
            container.bottom().saturating_sub(1),
            3,
            1,
        );
        Self {
            container,
            slots: [rows[0], rows[1], rows[2], rows[3], rows[4]],
            up_arrow,
            down_arrow,
        }
    }

    /// Whether `(column, row)` lands inside the browser panel.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.container.contains(Position::new(column, row))
    }

    /// The slot index under `(column, row)`, if any.
    pub fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.slots.iter().position(|slot| slot.contains(pos))
    }
}

/// Regions of the past-game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastGameLayout {
    /// The replayed final board.
    pub board: BoardLayout,
    /// Caption section next to the back button.
    pub caption: Rect,
    /// The back button returning to the history browser.
    pub back_button: Rect,
}

impl PastGameLayout {
    /// Lays out the past-game screen inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(chunks[1]);
        Self {
            board: BoardLayout::centered(chunks[0]),
            caption: bottom[1],
            back_button: center_rect(bottom[0], 10, 3),
        }
    }
}

/// Whether `(column, row)` lands inside `rect`.
pub fn hits(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, Mark};

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn top_left_tile_is_distinguishable_from_miss() {
        let layout = BoardLayout::centered(area());
        let board = Board::new();
        let tile0 = layout.tile(0);

        assert_eq!(
            layout.hit_test(tile0.x, tile0.y, &board),
            TileHit::Empty(0)
        );
        // One cell above the grid corner hits nothing.
        assert_eq!(
            layout.hit_test(tile0.x, tile0.y.saturating_sub(1), &board),
            TileHit::Miss
        );
    }

    #[test]
    fn occupied_tile_reports_occupied() {
        let layout = BoardLayout::centered(area());
        let mut board = Board::new();
        board.set(4, Cell::Occupied(Mark::X));
        let center = layout.tile(4);

        assert_eq!(
            layout.hit_test(center.x, center.y, &board),
            TileHit::Occupied(4)
        );
    }

    #[test]
    fn separator_lines_are_misses() {
        let layout = BoardLayout::centered(area());
        let board = Board::new();
        // Column between tile 0 and tile 1.
        let gap_x = layout.tile(0).right();
        let gap_y = layout.tile(0).y;
        assert_eq!(layout.hit_test(gap_x, gap_y, &board), TileHit::Miss);
    }

    #[test]
    fn more_button_is_disjoint_from_grid() {
        let layout = GameLayout::new(area());
        for i in 0..9 {
            assert!(!layout.board.tile(i).intersects(layout.more_button));
        }
    }

    #[test]
    fn history_arrows_sit_inside_container() {
        let layout = HistoryLayout::new(area());
        assert!(layout.container.intersects(layout.up_arrow));
        assert!(layout.container.intersects(layout.down_arrow));
        assert!(hits(layout.up_arrow, layout.up_arrow.x, layout.up_arrow.y));
    }

    #[test]
    fn options_panel_click_regions() {
        let layout = OptionsLayout::new(area());
        let first = layout.items[0];
        assert!(layout.contains(first.x, first.y));
        // A corner of the screen is outside the panel.
        assert!(!layout.contains(0, 0));
    }
}
