use crate::error::EngineError;
use super::board::{Board, CENTER};
use super::types::{GameOutcome, Mark, Player};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

/// Picks the optimal cell for `player`. An empty board answers the center
/// without searching.
pub fn choose_move(board: &Board, player: Player) -> Result<usize, EngineError> {
    if board.is_blank() {
        return Ok(CENTER);
    }
    search_best_move(board, player).map(|scored| scored.index)
}

/// Exhaustive minimax over every empty cell. Ties keep the lowest index.
pub fn search_best_move(board: &Board, player: Player) -> Result<ScoredMove, EngineError> {
    if evaluate(board).is_terminal() {
        return Err(EngineError::NoLegalMove);
    }

    let mut board = *board;
    let mut best: Option<ScoredMove> = None;

    for index in board.available_moves() {
        let score = board.with_mark(index, player.mark(), |b| minimax(b, 0, false, player));

        if best.is_none_or(|current| score > current.score) {
            best = Some(ScoredMove { index, score });
        }
    }

    best.ok_or(EngineError::NoLegalMove)
}

fn terminal_score(outcome: GameOutcome, bot: Player, depth: i32) -> Option<i32> {
    match outcome {
        GameOutcome::Win { player, .. } if player == bot => Some(WIN_SCORE - depth),
        GameOutcome::Win { .. } => Some(depth - WIN_SCORE),
        GameOutcome::Draw => Some(0),
        GameOutcome::InProgress => None,
    }
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot: Player) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), bot, depth) {
        return score;
    }

    let mover: Mark = if is_maximizing {
        bot.mark()
    } else {
        bot.opponent().mark()
    };

    let scores = board.available_moves().into_iter().map(|index| {
        board.with_mark(index, mover, |b| minimax(b, depth + 1, !is_maximizing, bot))
    });

    // A non-terminal position always has an empty cell.
    if is_maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}
