use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_completed_lines, try_move, Grid, Session, SessionConfig, Snapshot};
use blockfall::types::Input;

fn session() -> Session {
    Session::new(SessionConfig::default().with_seed(12345)).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut session = session();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session = Session::new(SessionConfig::default().with_seed(12345)).unwrap();
            }
            black_box(session.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(20, 10).unwrap();
            for row in 16..20 {
                grid.fill_row(row);
            }
            black_box(clear_completed_lines(&mut grid));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    c.bench_function("create_session", |b| {
        b.iter(|| black_box(session()))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let session = session();
    let piece = session.active().unwrap();
    let grid = session.grid().clone();

    c.bench_function("try_move", |b| {
        b.iter(|| black_box(try_move(black_box(&piece), 1, 0, &grid)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = session();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| black_box(session.handle_input(Input::RotateCw)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = session();
    let mut snap = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_try_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
