//! Start screen — title and a single play button.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::Session;
use tracing::{info, instrument};

use crate::layout::{StartLayout, hits};
use crate::screen::{Screen, ScreenTransition};

/// The start screen. Holds no state of its own.
#[derive(Debug, Default)]
pub struct StartScreen;

impl Screen for StartScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &Session) {
        let layout = StartLayout::new(frame.area());

        let title = Paragraph::new("TIC-TAC-TOE")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        let play = Paragraph::new("\nPLAY")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(play, layout.play);

        let help = Paragraph::new("click PLAY to start | q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let help_area = Rect::new(
            frame.area().x,
            frame.area().bottom().saturating_sub(1),
            frame.area().width,
            1,
        );
        frame.render_widget(help, help_area);
    }

    #[instrument(skip(self, _key, _session))]
    fn handle_key(&mut self, _key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        ScreenTransition::Stay
    }

    #[instrument(skip(self, _session))]
    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        _session: &mut Session,
    ) -> ScreenTransition {
        let layout = StartLayout::new(area);
        if hits(layout.play, column, row) {
            info!("Play clicked");
            ScreenTransition::StartGame
        } else {
            ScreenTransition::Stay
        }
    }
}
