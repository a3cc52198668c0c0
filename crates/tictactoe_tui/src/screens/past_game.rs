//! Past-game screen — read-only replay of a recorded final board.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{HistoryEntry, Session};
use tracing::{info, instrument};

use crate::layout::{PastGameLayout, hits};
use crate::screen::{Screen, ScreenTransition};
use crate::screens::HistoryScreen;

/// State for the past-game screen. Owns the history browser it was opened
/// from, handed back intact on the way out.
#[derive(Debug, Getters)]
pub struct PastGameScreen {
    history: HistoryScreen,
    entry: HistoryEntry,
}

impl PastGameScreen {
    /// Shows the given recorded game, covering the history browser.
    #[instrument(skip(entry, history))]
    pub fn new(entry: HistoryEntry, history: HistoryScreen) -> Self {
        Self { history, entry }
    }

    /// Leaves the replay, returning the covered history browser.
    pub fn into_history(self) -> HistoryScreen {
        self.history
    }
}

impl Screen for PastGameScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &Session) {
        let layout = PastGameLayout::new(frame.area());

        crate::ui::render_board(frame, &layout.board, self.entry.final_board(), None);

        let back = Paragraph::new("\n< Back")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(back, layout.back_button);

        let caption = Paragraph::new(format!(
            "\n{} in {} turns",
            self.entry.outcome(),
            self.entry.turn_count()
        ))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
        frame.render_widget(caption, layout.caption);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Leaving past game view");
                ScreenTransition::ClosePastGame
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, _session))]
    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        _session: &mut Session,
    ) -> ScreenTransition {
        let layout = PastGameLayout::new(area);
        if hits(layout.back_button, column, row) {
            info!("Back to history browser");
            ScreenTransition::ClosePastGame
        } else {
            ScreenTransition::Stay
        }
    }
}
