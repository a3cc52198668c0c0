//! Game screen — the live 3x3 grid, turn indicators, and the "more" button.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{HistoryEntry, Mark, Outcome, Placement, Session, WinLine};
use tracing::{debug, info, instrument};

use crate::layout::{GameLayout, TileHit, hits};
use crate::screen::{Screen, ScreenTransition};
use crate::ui::{mark_color, render_board};

/// View of a finished game, kept on screen until the next game starts.
///
/// The live board resets the moment a game ends, so the screen retains its
/// own copy of the final position and the winning line to keep displaying
/// them.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct FinishedView {
    /// The recorded entry for the finished game.
    entry: HistoryEntry,
    /// The winning line, `None` on a tie.
    win: Option<WinLine>,
}

/// State for the game screen.
#[derive(Debug, Default, Getters)]
pub struct GameScreen {
    finished: Option<FinishedView>,
}

impl GameScreen {
    /// Creates a fresh game screen.
    pub fn new() -> Self {
        Self::default()
    }

    fn render_turn_tiles(&self, frame: &mut Frame, zone: Rect, turn: Option<Mark>) {
        let tile_style = |mark: Mark| {
            if turn == Some(mark) {
                Style::default()
                    .fg(mark_color(mark))
                    .add_modifier(Modifier::BOLD)
            } else {
                // Dimmed when it is not this mark's turn, or no game is on.
                Style::default().fg(Color::DarkGray)
            }
        };
        let left = Rect::new(zone.x, zone.y, zone.width / 2, zone.height);
        let right = Rect::new(zone.x + zone.width / 2, zone.y, zone.width / 2, zone.height);
        let x_tile = Paragraph::new("\nX")
            .alignment(Alignment::Center)
            .style(tile_style(Mark::X));
        let o_tile = Paragraph::new("\nO")
            .alignment(Alignment::Center)
            .style(tile_style(Mark::O));
        frame.render_widget(x_tile, left);
        frame.render_widget(o_tile, right);
    }

    fn caption(&self, session: &Session) -> String {
        let game = session.game();
        if game.ongoing() {
            return format!("Current turn: {}", game.turn_count());
        }
        match &self.finished {
            Some(view) => match view.entry.outcome() {
                Outcome::Winner(_) => {
                    format!("Game won in {} turns", view.entry.turn_count())
                }
                Outcome::Tie => "Tie Game".to_string(),
            },
            None => "Press Space to start".to_string(),
        }
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let layout = GameLayout::new(frame.area());
        let game = session.game();

        // A finished game stays on display until the next one starts.
        let (board, win) = match &self.finished {
            Some(view) if !game.ongoing() => (view.entry.final_board(), view.win),
            _ => (game.board(), None),
        };
        render_board(frame, &layout.board, board, win);

        self.render_turn_tiles(frame, layout.turn_zone, game.turn());

        let caption = Paragraph::new(format!("\n{}", self.caption(session)))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        frame.render_widget(caption, layout.count_zone);

        let more = Paragraph::new("\nmore ⋯")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(more, layout.more_button);

        let help = Paragraph::new("click a tile to move | Space: new game | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, _key, _session))]
    fn handle_key(&mut self, _key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        ScreenTransition::Stay
    }

    #[instrument(skip(self, session))]
    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        session: &mut Session,
    ) -> ScreenTransition {
        let layout = GameLayout::new(area);

        if session.game().ongoing() {
            match layout.board.hit_test(column, row, session.game().board()) {
                TileHit::Empty(index) => {
                    match session.place_mark(index) {
                        Placement::Marked { mark } => {
                            debug!(index, %mark, "Mark placed");
                        }
                        Placement::Finished { entry, win } => {
                            info!(outcome = %entry.outcome(), "Game finished");
                            self.finished = Some(FinishedView { entry, win });
                        }
                        Placement::Refused => {}
                    }
                    return ScreenTransition::Stay;
                }
                TileHit::Occupied(index) => {
                    debug!(index, "Tile already occupied");
                    return ScreenTransition::Stay;
                }
                TileHit::Miss => {}
            }
        }

        if hits(layout.more_button, column, row) {
            info!("Opening options overlay");
            ScreenTransition::OpenOptions
        } else {
            ScreenTransition::Stay
        }
    }
}
