//! Tournament selection.
//!
//! Parents are chosen by drawing `k` individuals uniformly **with
//! replacement** and keeping the one with the strictly shortest tour.
//! Higher `k` means stronger selection pressure; `k = 2` is the classic
//! binary tournament.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Selects a parent index from the population by tournament.
///
/// Draws `k` indices independently and uniformly, duplicates allowed, so
/// `k` may exceed the population size. Ties keep the first contestant
/// encountered (comparison is strictly-less).
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament_select<R: Rng>(
    population: &[Tour],
    matrix: &DistanceMatrix,
    k: usize,
    rng: &mut R,
) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    let mut best_len = matrix.closed_cost(population[best_idx].order());
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let len = matrix.closed_cost(population[idx].order());
        if len < best_len {
            best_idx = idx;
            best_len = len;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Line graph: tours keeping 0..3 in cyclic order are shortest.
    fn matrix() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0.0, 1.0, 9.0, 9.0],
            vec![1.0, 0.0, 9.0, 9.0],
            vec![9.0, 9.0, 0.0, 1.0],
            vec![9.0, 9.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    fn population() -> Vec<Tour> {
        vec![
            Tour::from_order(vec![0, 2, 1, 3]), // length 36
            Tour::from_order(vec![0, 1, 2, 3]), // length 20, the best
            Tour::from_order(vec![0, 3, 1, 2]), // length 36
        ]
    }

    #[test]
    fn test_large_tournament_finds_best() {
        let m = matrix();
        let pop = population();
        let mut rng = StdRng::seed_from_u64(42);

        // With k much larger than the population, every index is drawn
        // with overwhelming probability, so the best must win.
        let mut hits = 0;
        let trials = 200;
        for _ in 0..trials {
            if tournament_select(&pop, &m, 64, &mut rng) == 1 {
                hits += 1;
            }
        }
        assert_eq!(hits, trials, "best tour should win every large tournament");
    }

    #[test]
    fn test_binary_tournament_favors_best() {
        let m = matrix();
        let pop = population();
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 3];
        let trials = 10_000;
        for _ in 0..trials {
            counts[tournament_select(&pop, &m, 2, &mut rng)] += 1;
        }
        // P(best wins binary tournament) = 1 - (2/3)^2 = 5/9 ≈ 0.556
        assert!(
            counts[1] > counts[0] && counts[1] > counts[2],
            "best should be selected most often: {counts:?}"
        );
    }

    #[test]
    fn test_single_individual_population() {
        let m = matrix();
        let pop = vec![Tour::from_order(vec![0, 1, 2, 3])];
        let mut rng = StdRng::seed_from_u64(42);
        // Tournament size exceeding population size is fine: sampling is
        // with replacement.
        assert_eq!(tournament_select(&pop, &m, 5, &mut rng), 0);
    }

    #[test]
    fn test_ties_resolved_by_first_seen() {
        let m = matrix();
        // Two rotations of the same cycle: identical length.
        let pop = vec![
            Tour::from_order(vec![0, 1, 2, 3]),
            Tour::from_order(vec![1, 2, 3, 0]),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 2];
        for _ in 0..10_000 {
            counts[tournament_select(&pop, &m, 2, &mut rng)] += 1;
        }
        // Strictly-less comparison: the winner is whichever equal-length
        // tour was drawn first, so both keep roughly their draw frequency.
        assert!(counts[0] > 3000 && counts[1] > 3000, "{counts:?}");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let m = matrix();
        let pop: Vec<Tour> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        tournament_select(&pop, &m, 2, &mut rng);
    }
}
