use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexplosion::core::{is_connected_path, GameSession, Grid, SessionRules};
use lexplosion::types::Coord;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_5x5", |b| {
        b.iter(|| Grid::generate(5, 5, black_box(1_700_000_000_000)))
    });

    c.bench_function("generate_12x12", |b| {
        b.iter(|| Grid::generate(12, 12, black_box(42)))
    });
}

fn bench_collapse(c: &mut Criterion) {
    let cells = [
        Coord::new(4, 0),
        Coord::new(3, 1),
        Coord::new(2, 2),
        Coord::new(1, 3),
        Coord::new(0, 4),
    ];
    let grid = Grid::generate(5, 5, 42);

    c.bench_function("collapse_diagonal", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            g.collapse(black_box(&cells))
        })
    });
}

fn bench_path_check(c: &mut Criterion) {
    let path: Vec<Coord> = (0..8).map(|i| Coord::new(i / 2, i % 2)).collect();
    c.bench_function("connected_path_8", |b| {
        b.iter(|| is_connected_path(black_box(&path)))
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let rules = SessionRules {
        duration_secs: u32::MAX,
        ..SessionRules::default()
    };
    let mut session = GameSession::new(12345, rules);

    c.bench_function("session_tick", |b| {
        b.iter(|| session.tick())
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_collapse,
    bench_path_check,
    bench_session_tick
);
criterion_main!(benches);
