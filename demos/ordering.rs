//! # Ordering
//!
//! Evolves a shuffled permutation of `1..=12` back into ascending order.
//!
//! Fitness counts the genes sitting at their natural position, so the
//! optimum is 12. Ordered crossover and swap mutation keep every
//! chromosome a valid permutation.

use anyhow::Result;
use u_evolve::ga::{Crossover, GaConfig, GaRunner, Gene, Mutation, Selection};
use u_evolve::problems::Permutation;

const LENGTH: usize = 12;

fn in_place(tour: &[Gene]) -> f64 {
    tour.iter()
        .enumerate()
        .filter(|&(i, &g)| g == i as Gene + 1)
        .count() as f64
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let problem = Permutation::new(LENGTH, in_place).with_target(LENGTH as f64);
    let config = GaConfig::default()
        .with_population_size(200)
        .with_max_generations(2000)
        .with_selection(Selection::Tournament)
        .with_tournament_ratio(0.05)
        .with_crossover(Crossover::Ordered)
        .with_mutation(Mutation::Swap)
        .with_mutation_rate(0.02)
        .with_elitism_count(4);

    let result = GaRunner::new(&problem, &config).run()?;

    if result.converged {
        println!("Sorted in {} generations", result.generations);
    } else {
        println!("Stopped after {} generations", result.generations);
    }
    println!("Best tour: {:?}", result.best.chromosome());
    Ok(())
}
