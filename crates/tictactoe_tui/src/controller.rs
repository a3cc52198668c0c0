//! Controller — the state machine driving the five-screen TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use rand::Rng;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use tictactoe_core::Session;
use tracing::{debug, info, instrument, warn};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, HistoryScreen, OptionsScreen, PastGameScreen, StartScreen};

/// Active screen in the state machine.
///
/// Modal variants own the screen they were opened above, so dismissing a
/// modal hands the covered screen back exactly as it was left: each
/// back-action unwinds one level, and a stale or double-consumed snapshot
/// cannot be expressed.
#[derive(Debug)]
pub enum ActiveScreen {
    /// The start screen.
    Start(StartScreen),
    /// The live game.
    Game(GameScreen),
    /// Options overlay above the game.
    Options(OptionsScreen),
    /// History browser above the options overlay.
    History(HistoryScreen),
    /// Read-only replay above the history browser.
    PastGame(PastGameScreen),
}

impl ActiveScreen {
    /// Renders the current screen.
    pub fn render(&self, frame: &mut Frame, session: &Session) {
        match self {
            ActiveScreen::Start(s) => s.render(frame, session),
            ActiveScreen::Game(s) => s.render(frame, session),
            ActiveScreen::Options(s) => s.render(frame, session),
            ActiveScreen::History(s) => s.render(frame, session),
            ActiveScreen::PastGame(s) => s.render(frame, session),
        }
    }

    /// Routes a key event to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition {
        match self {
            ActiveScreen::Start(s) => s.handle_key(key, session),
            ActiveScreen::Game(s) => s.handle_key(key, session),
            ActiveScreen::Options(s) => s.handle_key(key, session),
            ActiveScreen::History(s) => s.handle_key(key, session),
            ActiveScreen::PastGame(s) => s.handle_key(key, session),
        }
    }

    /// Routes a left-click to the current screen.
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        session: &mut Session,
    ) -> ScreenTransition {
        match self {
            ActiveScreen::Start(s) => s.handle_click(column, row, area, session),
            ActiveScreen::Game(s) => s.handle_click(column, row, area, session),
            ActiveScreen::Options(s) => s.handle_click(column, row, area, session),
            ActiveScreen::History(s) => s.handle_click(column, row, area, session),
            ActiveScreen::PastGame(s) => s.handle_click(column, row, area, session),
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ActiveScreen::Start(_) => "start",
            ActiveScreen::Game(_) => "game",
            ActiveScreen::Options(_) => "options",
            ActiveScreen::History(_) => "history",
            ActiveScreen::PastGame(_) => "past_game",
        }
    }
}

/// Controller that drives the screen state machine.
///
/// Call [`Controller::run`] to start the event loop.
#[derive(Debug)]
pub struct Controller<R: Rng> {
    session: Session,
    rng: R,
}

impl<R: Rng> Controller<R> {
    /// Creates a controller over the given session and randomness source.
    pub fn new(session: Session, rng: R) -> Self {
        Self { session, rng }
    }

    /// The play session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the play session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Starts a fresh game without touching the current screen.
    ///
    /// Backs the global Space shortcut. It fires on every screen, even
    /// beneath a modal, where it silently abandons the game in play; the
    /// shortcut is a restart affordance and is intentionally not limited
    /// to the game screen.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.session.start_game(&mut self.rng);
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each iteration draws the current screen, blocks on the next input
    /// event, and fully processes it before reading another.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting event loop");
        let mut screen = ActiveScreen::Start(StartScreen);

        loop {
            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                screen.render(f, &self.session);
            })?;

            let transition = match event::read()? {
                Event::Key(key) => {
                    // Skip key release events (crossterm fires both).
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
                        KeyCode::Char(' ') => {
                            // Global restart shortcut, active on any screen.
                            self.restart();
                            ScreenTransition::Stay
                        }
                        _ => screen.handle_key(key, &mut self.session),
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
                        screen.handle_click(mouse.column, mouse.row, area, &mut self.session)
                    } else {
                        ScreenTransition::Stay
                    }
                }
                // Resizes are picked up by the next draw.
                _ => ScreenTransition::Stay,
            };

            screen = match self.apply_transition(transition, screen) {
                Some(next) => next,
                None => {
                    info!("Quitting");
                    return Ok(());
                }
            };
        }
    }

    /// Applies a screen transition, returning the next screen or `None`
    /// to quit.
    ///
    /// Consumes the current screen so modal transitions can move it into
    /// (or back out of) the next screen's state.
    #[instrument(skip(self, current), fields(from = current.name()))]
    pub fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(?transition, "Applying screen transition");
        match (transition, current) {
            (ScreenTransition::Stay, current) => Some(current),

            (ScreenTransition::Quit, _) => None,

            (ScreenTransition::StartGame, _) => {
                self.session.start_game(&mut self.rng);
                info!("Entering game screen");
                Some(ActiveScreen::Game(GameScreen::new()))
            }

            (ScreenTransition::OpenOptions, ActiveScreen::Game(game)) => {
                Some(ActiveScreen::Options(OptionsScreen::over(game)))
            }

            (ScreenTransition::CloseOptions, ActiveScreen::Options(options)) => {
                Some(ActiveScreen::Game(options.into_game()))
            }

            (ScreenTransition::OpenHistory, ActiveScreen::Options(options)) => {
                self.session.history_mut().reset_cursor();
                Some(ActiveScreen::History(HistoryScreen::over(options)))
            }

            (ScreenTransition::CloseHistory, ActiveScreen::History(history)) => {
                Some(ActiveScreen::Options(history.into_options()))
            }

            (ScreenTransition::OpenPastGame { entry_index }, ActiveScreen::History(history)) => {
                match self.session.history().get(entry_index).cloned() {
                    Some(entry) => {
                        Some(ActiveScreen::PastGame(PastGameScreen::new(entry, history)))
                    }
                    None => {
                        warn!(entry_index, "No such history entry");
                        Some(ActiveScreen::History(history))
                    }
                }
            }

            (ScreenTransition::ClosePastGame, ActiveScreen::PastGame(past)) => {
                Some(ActiveScreen::History(past.into_history()))
            }

            (transition, current) => {
                warn!(?transition, from = current.name(), "Transition does not apply here");
                Some(current)
            }
        }
    }
}
