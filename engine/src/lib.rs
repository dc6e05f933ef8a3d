pub mod config;
pub mod error;
pub mod logger;
pub mod session;
pub mod tictactoe;

pub use error::{EngineError, IllegalMoveReason, SessionError};
pub use session::{
    AI_PLAYER, GameMode, ScoreTally, Session, SessionSettings, SessionSnapshot, SessionState,
    Transition,
};
pub use tictactoe::{
    Board, GameOutcome, Line, Mark, Player, Position, ScoredMove, WIN_LINES, choose_move,
    evaluate, search_best_move,
};
