//! # All Ones
//!
//! Evolves a 64-bit string until every gene is 1, the classic OneMax
//! warm-up for genetic algorithms.
//!
//! Run with `cargo run --example all_ones`. Set the log level to DEBUG to
//! see the best individual of every generation.

use anyhow::Result;
use u_evolve::ga::{Crossover, GaConfig, GaRunner, Mutation, Selection};
use u_evolve::problems::OneMax;

fn main() -> Result<()> {
    // Initialize logging to see optimization progress
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let problem = OneMax::new(64);
    let config = GaConfig::default()
        .with_population_size(100)
        .with_max_generations(1000)
        .with_selection(Selection::Roulette)
        .with_crossover(Crossover::Uniform)
        .with_mutation(Mutation::BitFlip)
        .with_crossover_rate(0.95)
        .with_mutation_rate(0.01)
        .with_elitism_count(2);

    let result = GaRunner::new(&problem, &config).run()?;

    println!("Found solution in {} generations", result.generations);
    println!("Best solution: {}", result.best);
    Ok(())
}
