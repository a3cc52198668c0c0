//! Board rendering shared by the game and past-game screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_core::{Board, Cell, Mark, WinLine};

use crate::layout::{BoardLayout, TILE_HEIGHT, TILE_WIDTH};

/// Display color for a mark: X blue, O red.
pub fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

/// Renders the 3x3 grid with its marks, striking through the winning line
/// when one is given.
pub fn render_board(frame: &mut Frame, layout: &BoardLayout, board: &Board, win: Option<WinLine>) {
    let frame_area = frame.area();
    let win_cells = win.map(|line| line.cells());

    render_separators(frame, layout.area());

    for index in 0..9 {
        let tile = layout.tile(index).intersection(frame_area);
        if tile.is_empty() {
            continue;
        }
        let Some(Cell::Occupied(mark)) = board.get(index) else {
            continue;
        };
        let mut style = Style::default()
            .fg(mark_color(mark))
            .add_modifier(Modifier::BOLD);
        if win_cells.is_some_and(|cells| cells.contains(&index)) {
            style = Style::default()
                .fg(Color::White)
                .bg(mark_color(mark))
                .add_modifier(Modifier::BOLD);
        }
        // Leading newline drops the mark onto the tile's middle row.
        let paragraph = Paragraph::new(format!("\n{mark}"))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, tile);
    }
}

fn render_separators(frame: &mut Frame, area: Rect) {
    let frame_area = frame.area();
    let style = Style::default().fg(Color::DarkGray);
    let tile = TILE_WIDTH as usize;

    let horizontal = format!("{0}┼{0}┼{0}", "─".repeat(tile));
    for band in 0..2u16 {
        let y = area.y + TILE_HEIGHT + band * (TILE_HEIGHT + 1);
        let row = Rect::new(area.x, y, area.width, 1).intersection(frame_area);
        if !row.is_empty() {
            frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), row);
        }
    }

    let vertical = vec!["│"; TILE_HEIGHT as usize].join("\n");
    for band in 0..3u16 {
        let y = area.y + band * (TILE_HEIGHT + 1);
        for gap in 0..2u16 {
            let x = area.x + TILE_WIDTH + gap * (TILE_WIDTH + 1);
            let col = Rect::new(x, y, 1, TILE_HEIGHT).intersection(frame_area);
            if !col.is_empty() {
                frame.render_widget(Paragraph::new(vertical.as_str()).style(style), col);
            }
        }
    }
}
