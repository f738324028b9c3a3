use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, Cell, GameState, Piece};
use blockfall::types::{BlockColor, GameAction, ShapeKind, WELL_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick();
            black_box(state.rows_cleared());
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_2_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for x in (0..WELL_WIDTH).step_by(2) {
                let cells = [
                    Cell { x, y: 0, color: BlockColor::Orange },
                    Cell { x: x + 1, y: 0, color: BlockColor::Green },
                    Cell { x, y: 1, color: BlockColor::Red },
                    Cell { x: x + 1, y: 1, color: BlockColor::Blue },
                ];
                let mut piece = Piece::from_cells(ShapeKind::O, cells, None);
                piece.lock();
                board.push(piece);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_respawn", |b| {
        b.iter(|| {
            let mut state = GameState::new(12345);
            state.apply_action(black_box(GameAction::HardDrop));
        })
    });
}

fn bench_side_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveLeft));
            state.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_clear,
    bench_hard_drop,
    bench_side_move,
    bench_rotate
);
criterion_main!(benches);
