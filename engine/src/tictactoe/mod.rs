mod board;
mod bot_controller;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CENTER};
pub use bot_controller::{ScoredMove, choose_move, search_best_move};
pub use types::{GameOutcome, Line, Mark, Player, Position, WIN_LINES};
pub use win_detector::{check_win, check_win_with_line, evaluate};
