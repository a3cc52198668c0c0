//! One module per screen in the state machine.

mod game;
mod history;
mod options;
mod past_game;
mod start;

pub use game::{FinishedView, GameScreen};
pub use history::HistoryScreen;
pub use options::OptionsScreen;
pub use past_game::PastGameScreen;
pub use start::StartScreen;
