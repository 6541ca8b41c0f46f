use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use floodit_core::*;
use std::hint::black_box;

/// Plays a full game by cycling through the palette, the way a naive player would.
fn play_out(config: GameConfig, seed: u64) -> u32 {
    let mut source = RandomColors::from_seed(seed);
    let mut session = Session::new(config, &mut source).expect("valid config");
    let mut next = 0u8;
    while !session.is_finished() {
        let _ = session.select(Color(next));
        next = (next + 1) % config.colors;
    }
    session.steps()
}

fn bench_play_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_out");
    for size in [14u8, 50, 120] {
        for (name, topology, adjacency) in [
            ("plane_orthogonal", Topology::Plane, Adjacency::Orthogonal),
            ("torus_diagonal", Topology::Torus, Adjacency::Diagonal),
        ] {
            let config = GameConfig::new(size, topology, adjacency).expect("valid config");
            group.bench_with_input(BenchmarkId::new(name, size), &config, |b, &config| {
                b.iter(|| play_out(black_box(config), 1))
            });
        }
    }
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    c.bench_function("neighbors_torus_diagonal_255", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for row in 0..255u8 {
                total += neighbors((row, 0), 255, Topology::Torus, Adjacency::Diagonal).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_play_out, bench_neighbors);
criterion_main!(benches);
