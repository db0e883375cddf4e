//! The generational evolution loop.
//!
//! [`Evolver`] orchestrates a run: build the starting population, then
//! for each generation fill a fresh buffer with offspring (two tournament
//! selections, one crossover, conditional mutation per slot) and replace
//! the population wholesale. Termination is purely generation-count
//! driven; the best tour of the *final* population is reported. Without
//! elitism that best can be worse than tours seen in earlier generations,
//! which is the original design, not an accident — opt in via
//! [`EvolveConfig::elitism`](crate::EvolveConfig) to carry each
//! generation's best forward unchanged.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EvolveConfig;
use crate::distance::DistanceMatrix;
use crate::error::EvolveError;
use crate::operators::{mutate_offspring, segment_crossover};
use crate::selection::tournament_select;
use crate::tour::{initial_population, Tour};

/// Outcome of an evolutionary run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveResult {
    /// The shortest tour in the final population (first-seen on ties).
    pub best: Tour,

    /// Closed-tour length of `best`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-of-population length after each generation; index 0 is the
    /// initial population.
    pub history: Vec<f64>,
}

/// Runs the evolutionary search.
///
/// # Usage
///
/// ```
/// use evotsp::{DistanceMatrix, EvolveConfig, Evolver};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 9.0, 9.0],
///     vec![1.0, 0.0, 9.0, 9.0],
///     vec![9.0, 9.0, 0.0, 1.0],
///     vec![9.0, 9.0, 1.0, 0.0],
/// ])?;
/// let config = EvolveConfig::default()
///     .with_population_size(20)
///     .with_generations(60)
///     .with_tournament_size(3)
///     .with_seed(42);
/// let result = Evolver::run(&matrix, &config)?;
/// assert_eq!(result.best.len(), 4);
/// # Ok::<(), evotsp::EvolveError>(())
/// ```
pub struct Evolver;

impl Evolver {
    /// Runs the search for exactly `config.generations` generations and
    /// returns the best tour of the final population.
    ///
    /// A single `StdRng`, seeded from `config.seed` (or OS entropy), is
    /// threaded through initialization, selection, crossover, and
    /// mutation for the whole run.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidConfig`] if the configuration fails
    /// [`EvolveConfig::validate`]. Matrix validity is guaranteed by
    /// [`DistanceMatrix::new`].
    pub fn run(matrix: &DistanceMatrix, config: &EvolveConfig) -> Result<EvolveResult, EvolveError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = matrix.len();
        let mut population = initial_population(n, config.population_size, config.init, &mut rng);

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(matrix.closed_cost(best_of(&population, matrix).order()));

        for gen in 0..config.generations {
            let mut next = Vec::with_capacity(config.population_size);
            if config.elitism {
                next.push(best_of(&population, matrix).clone());
            }
            while next.len() < config.population_size {
                let p1 = tournament_select(&population, matrix, config.tournament_size, &mut rng);
                let p2 = tournament_select(&population, matrix, config.tournament_size, &mut rng);
                let mut child =
                    segment_crossover(population[p1].order(), population[p2].order(), &mut rng);
                mutate_offspring(&mut child, config.mutation, &mut rng);
                next.push(Tour::from_order(child));
            }
            population = next;

            let gen_best = matrix.closed_cost(best_of(&population, matrix).order());
            history.push(gen_best);
            log::debug!("generation {}: best length {gen_best}", gen + 1);
        }

        let best = best_of(&population, matrix).clone();
        let best_length = matrix.closed_cost(best.order());
        Ok(EvolveResult {
            best,
            best_length,
            generations: config.generations,
            history,
        })
    }
}

/// The shortest tour in the population, first-seen on ties.
fn best_of<'a>(population: &'a [Tour], matrix: &DistanceMatrix) -> &'a Tour {
    population
        .iter()
        .min_by(|a, b| {
            matrix
                .closed_cost(a.order())
                .partial_cmp(&matrix.closed_cost(b.order()))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}
