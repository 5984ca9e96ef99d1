//! Criterion benchmarks for the evolutionary engine.
//!
//! Uses the bundled reference problems to measure engine overhead
//! independent of any expensive fitness function.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::ga::{Crossover, GaConfig, GaRunner, Gene, Mutation, Selection};
use u_evolve::problems::{OneMax, Permutation};

// ===========================================================================
// OneMax: maximize the number of 1-bits
// ===========================================================================

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    group.sample_size(10);

    for selection in [Selection::Roulette, Selection::Tournament] {
        for (len, pop, gen) in [(32usize, 50usize, 50usize), (128, 100, 30)] {
            let problem = OneMax::new(len);
            let config = GaConfig {
                population_size: pop,
                max_generations: gen,
                selection,
                seed: Some(42),
                ..GaConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{selection:?}_n{len}_p{pop}_g{gen}"), len),
                &(problem, config),
                |b, (p, c)| {
                    b.iter(|| {
                        let result = GaRunner::new(black_box(p), black_box(c)).run();
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Permutation: ordered crossover + swap mutation
// ===========================================================================

fn displacement(tour: &[Gene]) -> f64 {
    let off: i64 = tour
        .iter()
        .enumerate()
        .map(|(i, &g)| (i64::from(g) - 1 - i as i64).abs())
        .sum();
    -(off as f64)
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_permutation");
    group.sample_size(10);

    for len in [20usize, 50, 100] {
        let problem = Permutation::new(len, displacement);
        let config = GaConfig::default()
            .with_population_size(100)
            .with_max_generations(30)
            .with_selection(Selection::Tournament)
            .with_crossover(Crossover::Ordered)
            .with_mutation(Mutation::Swap)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(len), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = GaRunner::new(black_box(p), black_box(c)).run();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_onemax, bench_permutation);
criterion_main!(benches);
