use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_engine::{
    AI_PLAYER, Board, GameMode, GameOutcome, Player, Session, SessionSettings, SessionState,
    choose_move, evaluate,
};

fn play_perfect_game(mut board: Board, mut to_move: Player) -> GameOutcome {
    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return outcome;
        }
        let index = choose_move(&board, to_move).unwrap();
        board = board
            .apply_move(index, to_move)
            .unwrap_or_else(|e| panic!("engine chose illegal move {}: {}", index, e));
        to_move = to_move.opponent();
    }
}

/// Walks every line of play the opponent can choose against the AI.
fn count_outcomes(board: Board, to_move: Player, ai: Player, results: &mut [u32; 3]) {
    match evaluate(&board) {
        GameOutcome::Win { player, .. } if player == ai => results[0] += 1,
        GameOutcome::Win { .. } => results[2] += 1,
        GameOutcome::Draw => results[1] += 1,
        GameOutcome::InProgress => {
            if to_move == ai {
                let index = choose_move(&board, ai).unwrap();
                let next = board.apply_move(index, ai).unwrap();
                count_outcomes(next, to_move.opponent(), ai, results);
            } else {
                for index in board.available_moves() {
                    let next = board.apply_move(index, to_move).unwrap();
                    count_outcomes(next, to_move.opponent(), ai, results);
                }
            }
        }
    }
}

#[test]
fn test_self_play_from_empty_board_is_draw() {
    assert_eq!(play_perfect_game(Board::new(), Player::X), GameOutcome::Draw);
    assert_eq!(play_perfect_game(Board::new(), Player::O), GameOutcome::Draw);
}

#[test]
fn test_ai_never_loses_to_any_opponent_line() {
    for ai in [Player::X, Player::O] {
        for first in [Player::X, Player::O] {
            let mut results = [0u32; 3];
            count_outcomes(Board::new(), first, ai, &mut results);

            assert_eq!(results[2], 0, "AI {} lost with {} moving first", ai, first);
            assert!(results[0] > 0, "AI {} never won with {} moving first", ai, first);
        }
    }
}

#[test]
fn test_ai_session_never_loses_to_random_opponent() {
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let first = if rng.random_bool(0.5) { Player::X } else { Player::O };

        let mut session = Session::new();
        let mut transition = session.new_game(SessionSettings::new(GameMode::Ai, first));

        while session.state() == SessionState::Running {
            transition = if transition.ai_turn_pending {
                session.play_ai_turn().unwrap()
            } else {
                let moves = session.board().available_moves();
                let index = moves[rng.random_range(0..moves.len())];
                session.submit_move(index).unwrap()
            };
        }

        assert_ne!(
            transition.outcome.winner(),
            Some(AI_PLAYER.opponent()),
            "AI lost with seed {}",
            seed
        );
    }
}
