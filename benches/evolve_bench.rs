//! Criterion benchmarks for the evolution engine.
//!
//! Uses synthetic random cost matrices to measure full-run throughput at
//! a few problem sizes, plus the crossover operator in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use evotsp::operators::segment_crossover;
use evotsp::{DistanceMatrix, EvolveConfig, Evolver, MutationPolicy, Tour};

/// A random symmetric cost matrix with zero diagonal.
fn random_matrix(n: usize, rng: &mut StdRng) -> DistanceMatrix {
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let cost = rng.random_range(1.0..100.0);
            rows[i][j] = cost;
            rows[j][i] = cost;
        }
    }
    DistanceMatrix::new(rows).expect("synthetic matrix is valid")
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolver_run");
    for n in [8, 16, 32] {
        let mut rng = StdRng::seed_from_u64(42);
        let matrix = random_matrix(n, &mut rng);
        let config = EvolveConfig::default()
            .with_population_size(50)
            .with_generations(100)
            .with_tournament_size(3)
            .with_mutation(MutationPolicy::Probabilistic(0.1))
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| Evolver::run(black_box(&matrix), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p1 = Tour::random(64, &mut rng).into_order();
    let p2 = Tour::random(64, &mut rng).into_order();

    c.bench_function("segment_crossover_64", |b| {
        b.iter(|| segment_crossover(black_box(&p1), black_box(&p2), &mut rng))
    });
}

criterion_group!(benches, bench_full_run, bench_crossover);
criterion_main!(benches);
