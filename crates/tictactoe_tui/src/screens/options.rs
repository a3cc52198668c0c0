//! Options overlay — modal panel above the game screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::Session;
use tracing::{info, instrument};

use crate::layout::{OptionsLayout, hits};
use crate::screen::{Screen, ScreenTransition};
use crate::screens::GameScreen;

/// State for the options overlay. Owns the game screen it covers, which is
/// handed back intact when the overlay is dismissed.
#[derive(Debug, Getters)]
pub struct OptionsScreen {
    game: GameScreen,
}

impl OptionsScreen {
    /// Opens the overlay above the given game screen.
    #[instrument(skip(game))]
    pub fn over(game: GameScreen) -> Self {
        Self { game }
    }

    /// Dismisses the overlay, returning the covered game screen.
    pub fn into_game(self) -> GameScreen {
        self.game
    }
}

impl Screen for OptionsScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        // The covered game screen stays visible behind the panel.
        self.game.render(frame, session);

        let layout = OptionsLayout::new(frame.area());
        frame.render_widget(Clear, layout.container);
        let panel = Block::default()
            .borders(Borders::ALL)
            .title("Options")
            .style(Style::default().fg(Color::White));
        frame.render_widget(panel, layout.container);

        let labels = ["History", "", ""];
        for (item, label) in layout.items.iter().zip(labels) {
            let style = if label.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            let row = Paragraph::new(format!("\n{label}"))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(row, *item);
        }
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Dismissing options overlay");
                ScreenTransition::CloseOptions
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
        let layout = OptionsLayout::new(area);
        if !layout.contains(column, row) {
            info!("Click outside panel, returning to game");
            return ScreenTransition::CloseOptions;
        }
        if hits(layout.items[0], column, row) {
            info!("History selected");
            ScreenTransition::OpenHistory
        } else {
            // Remaining rows are reserved for future options.
            ScreenTransition::Stay
        }
    }
}
