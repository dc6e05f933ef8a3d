use tictactoe_engine::{
    AI_PLAYER, GameMode, GameOutcome, Mark, Position, SessionSnapshot, SessionState,
};

const ROW_SEPARATOR: &str = "---+---+---";

/// Draws the grid. Empty cells show their key, winning cells are bracketed.
pub fn render_board(snapshot: &SessionSnapshot) -> String {
    let winning_line = snapshot.outcome.winning_line();

    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = Position::new(row, col).to_index();
                    let symbol = match snapshot.board[index] {
                        Mark::X => 'X',
                        Mark::O => 'O',
                        Mark::Empty => char::from(b'1' + index as u8),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn status_text(snapshot: &SessionSnapshot) -> String {
    match (snapshot.state, snapshot.outcome) {
        (SessionState::Idle, _) => "Type 'new' to start a game.".to_string(),
        (_, GameOutcome::Win { player, .. }) => {
            format!("{} wins!  Type 'new' to play again.", player)
        }
        (_, GameOutcome::Draw) => "Draw!  Type 'new' to play again.".to_string(),
        (_, GameOutcome::InProgress) => {
            if snapshot.mode == GameMode::Ai && snapshot.turn == AI_PLAYER {
                format!("Turn: {} (computer)", snapshot.turn)
            } else {
                format!("Turn: {}", snapshot.turn)
            }
        }
    }
}

pub fn score_text(snapshot: &SessionSnapshot) -> String {
    format!(
        "X: {}  O: {}  Draws: {}",
        snapshot.scores.x, snapshot.scores.o, snapshot.scores.draws
    )
}

pub fn render(snapshot: &SessionSnapshot) -> String {
    format!(
        "\n{}\n\n{}\n{}",
        render_board(snapshot),
        status_text(snapshot),
        score_text(snapshot)
    )
}
