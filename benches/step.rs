use conway_canvas::{step, Grid};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.15;

fn random_grid(n: usize) -> Grid {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    Grid::from_fn(n, n, |_, _| rng.gen_bool(FILL_RATE))
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for n in [50, 200, 500] {
        let grid = random_grid(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| step(grid))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
