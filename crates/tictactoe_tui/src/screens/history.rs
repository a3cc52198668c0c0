//! History browser — scrollable window over completed games.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::Session;
use tracing::{debug, info, instrument};

use crate::layout::{HistoryLayout, hits};
use crate::screen::{Screen, ScreenTransition};
use crate::screens::OptionsScreen;

/// State for the history browser. Owns the options overlay it covers,
/// handed back intact when the browser is dismissed.
#[derive(Debug, Getters)]
pub struct HistoryScreen {
    options: OptionsScreen,
}

impl HistoryScreen {
    /// Opens the browser above the given options overlay.
    #[instrument(skip(options))]
    pub fn over(options: OptionsScreen) -> Self {
        Self { options }
    }

    /// Dismisses the browser, returning the covered options overlay.
    pub fn into_options(self) -> OptionsScreen {
        self.options
    }
}

impl Screen for HistoryScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        // Options overlay (and the game behind it) stay visible.
        self.options.render(frame, session);

        let layout = HistoryLayout::new(frame.area());
        frame.render_widget(Clear, layout.container);
        let panel = Block::default()
            .borders(Borders::ALL)
            .title("Game History")
            .style(Style::default().fg(Color::White));
        frame.render_widget(panel, layout.container);

        let window = session.history().visible_window();
        for (i, slot) in layout.slots.iter().enumerate() {
            let text = match window.get(i) {
                Some(entry) => {
                    format!("\n{} in {} turns", entry.outcome(), entry.turn_count())
                }
                None if session.history().is_empty() && i == 0 => {
                    "\nno games played yet".to_string()
                }
                None => String::new(),
            };
            let style = if window.get(i).is_some() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut block = Block::default();
            if i + 1 < layout.slots.len() {
                block = block.borders(Borders::BOTTOM);
            }
            let row = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(row, *slot);
        }

        let arrow_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new("▲").style(arrow_style).alignment(Alignment::Center),
            layout.up_arrow,
        );
        frame.render_widget(
            Paragraph::new("▼").style(arrow_style).alignment(Alignment::Center),
            layout.down_arrow,
        );
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                info!("Dismissing history browser");
                ScreenTransition::CloseHistory
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, session))]
    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        session: &mut Session,
    ) -> ScreenTransition {
        let layout = HistoryLayout::new(area);
        if !layout.contains(column, row) {
            info!("Click outside browser, returning to options");
            return ScreenTransition::CloseHistory;
        }

        // Arrows take precedence over the slots they overlap.
        if hits(layout.down_arrow, column, row) {
            session.history_mut().scroll_older();
            debug!(cursor = session.history().cursor(), "Scrolled older");
            return ScreenTransition::Stay;
        }
        if hits(layout.up_arrow, column, row) {
            session.history_mut().scroll_newer();
            debug!(cursor = session.history().cursor(), "Scrolled newer");
            return ScreenTransition::Stay;
        }

        if let Some(slot) = layout.slot_at(column, row) {
            if let Some(entry_index) = session.history().slot_index(slot) {
                info!(slot, entry_index, "Opening past game");
                return ScreenTransition::OpenPastGame { entry_index };
            }
            debug!(slot, "Empty history slot");
        }
        ScreenTransition::Stay
    }
}
