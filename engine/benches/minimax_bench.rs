use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::{Board, Mark, Player, choose_move, evaluate, search_best_move};

fn bench_full_search_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_full_search_empty", |b| {
        let board = Board::new();
        b.iter(|| search_best_move(black_box(&board), Player::X));
    });
}

fn bench_reply_to_opening(c: &mut Criterion) {
    c.bench_function("minimax_reply_to_corner_opening", |b| {
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        let board = Board::from_marks(cells);
        b.iter(|| choose_move(black_box(&board), Player::O));
    });
}

fn bench_self_play_game(c: &mut Criterion) {
    c.bench_function("minimax_self_play_game", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut player = Player::X;
            while !evaluate(&board).is_terminal() {
                let Ok(index) = choose_move(&board, player) else {
                    break;
                };
                let Ok(next) = board.apply_move(index, player) else {
                    break;
                };
                board = next;
                player = player.opponent();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_full_search_empty_board,
    bench_reply_to_opening,
    bench_self_play_game
);
criterion_main!(benches);
