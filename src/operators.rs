//! Genetic operators on permutations.
//!
//! Segment-copy order crossover and swap mutation. Both operate on plain
//! `&[usize]` index sequences and both preserve the permutation invariant
//! by construction: crossover inserts every gene exactly once, and swap
//! mutation is a pure element exchange.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

use crate::config::MutationPolicy;

/// Segment-copy order crossover.
///
/// Combines two equal-length parent permutations into one child:
///
/// 1. Draw `start` uniformly from `0..n`, then `end` uniformly from
///    `start..n`.
/// 2. Copy parent1's genes at positions `start..end` into the child
///    verbatim (`start == end` copies nothing).
/// 3. Walk parent2 beginning at index `end`, wrapping; each gene not
///    already in the child fills the next slot counting up from position
///    `end`, wrapping.
///
/// A full-range segment degenerates to a copy of parent1; an empty
/// segment builds the child entirely from parent2's rotated order.
///
/// # Panics
///
/// Panics if the parents have different lengths or are empty.
pub fn segment_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let start = rng.random_range(0..n);
    let end = start + rng.random_range(0..n - start);
    splice(parent1, parent2, start, end)
}

/// Deterministic crossover body for a fixed cut `start..end` (exclusive
/// end, `start <= end < n`).
fn splice(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..end {
        child[i] = parent1[i];
        present[parent1[i]] = true;
    }

    // Fill the remaining slots from parent2, reading and writing from the
    // cut point onward so parent2's order relative to the cut survives.
    let mut slot = end;
    for offset in 0..n {
        let gene = parent2[(end + offset) % n];
        if !present[gene] {
            child[slot % n] = gene;
            present[gene] = true;
            slot += 1;
        }
    }

    child
}

/// Swap mutation: exchange two uniformly drawn positions.
///
/// Positions are drawn with replacement, so a no-op self-swap is
/// possible.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

/// Applies the configured mutation policy to one offspring.
///
/// [`MutationPolicy::Always`] mutates unconditionally, once.
/// [`MutationPolicy::Probabilistic`] mutates iff a uniform draw in
/// `[0, 1)` falls below the rate, consuming exactly one draw either way.
pub fn mutate_offspring<R: Rng>(perm: &mut [usize], policy: MutationPolicy, rng: &mut R) {
    match policy {
        MutationPolicy::Always => swap_mutation(perm, rng),
        MutationPolicy::Probabilistic(rate) => {
            if rng.random_range(0.0..1.0) < rate {
                swap_mutation(perm, rng);
            }
        }
    }
}
