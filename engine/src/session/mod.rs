mod game_session;
mod score;
mod settings;

pub use game_session::{AI_PLAYER, Session, SessionSnapshot, SessionState, Transition};
pub use score::ScoreTally;
pub use settings::{GameMode, SessionSettings};
