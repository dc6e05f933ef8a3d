use super::board::Board;
use super::types::{GameOutcome, Line, Player, WIN_LINES};

pub fn check_win_with_line(board: &Board) -> Option<(Player, Line)> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let player = board[a].player()?;
        if board[a] == board[b] && board[a] == board[c] {
            Some((player, *line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}

/// Classifies the position. Call after every move.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, line)) = check_win_with_line(board) {
        return GameOutcome::Win { player, line };
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
