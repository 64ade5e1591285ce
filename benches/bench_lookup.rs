use criterion::{criterion_group, criterion_main, Criterion};

use cornerdb::constants::N_CORNER_STATES;
use cornerdb::cubie::CubieCube;
use cornerdb::moves::Move::*;
use cornerdb::pruning::NibbleArray;

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("apply_moves", |b| {
        b.iter(|| CubieCube::default().apply_moves(&[R, U, R3, U3]))
    });
    group.finish();
}

fn bench_coord(c: &mut Criterion) {
    let cc = CubieCube::default().apply_moves(&[R, U, R3, U3, F2, L, B3]);
    c.bench_function("corner_coord", |b| b.iter(|| cc.get_corner_coord()));
}

fn bench_nibble(c: &mut Criterion) {
    let mut nibbles = NibbleArray::new(N_CORNER_STATES);
    nibbles.set(45_974_421, 7);
    c.bench_function("nibble_get", |b| b.iter(|| nibbles.get(45_974_421)));
}

criterion_group!(benches, bench_moves, bench_coord, bench_nibble);
criterion_main!(benches);
