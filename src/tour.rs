//! Tour representation and population initialization.
//!
//! A [`Tour`] is an owned permutation of node indices `0..n`. Tours carry
//! no cached fitness: length is recomputed on demand through
//! [`DistanceMatrix::tour_length`](crate::DistanceMatrix::tour_length),
//! which keeps the value an always-plain index sequence that display
//! layers can consume directly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::InitPolicy;

/// A candidate closed tour: an ordered permutation of node indices.
///
/// Each index in `0..n` appears exactly once. Tours are built by the
/// initializer or by crossover, and perturbed in place only by mutation.
///
/// # Examples
///
/// ```
/// use evotsp::Tour;
///
/// let tour = Tour::from_order(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps an existing visiting order.
    ///
    /// The caller is responsible for `order` being a permutation; the
    /// engine only ever constructs tours through [`Tour::random`] or
    /// crossover, both of which guarantee it.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Builds a uniformly random tour over `n` nodes (Fisher–Yates).
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self { order }
    }

    /// The visiting order as node indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access for in-place perturbation.
    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Consumes the tour, returning the plain index sequence.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builds the starting generation of `size` tours over `n` nodes.
///
/// - [`InitPolicy::IndependentRandom`]: every tour is an independent
///   uniform permutation.
/// - [`InitPolicy::IdenticalClone`]: one random seed tour, cloned across
///   the whole population. Diversity then comes only from subsequent
///   crossover and mutation; crossing two identical parents reproduces
///   the parent, so the first generation diverges only through whichever
///   offspring are mutated. This degenerate seeding is a deliberate,
///   selectable mode.
pub fn initial_population<R: Rng>(
    n: usize,
    size: usize,
    policy: InitPolicy,
    rng: &mut R,
) -> Vec<Tour> {
    match policy {
        InitPolicy::IndependentRandom => (0..size).map(|_| Tour::random(n, rng)).collect(),
        InitPolicy::IdenticalClone => {
            let seed = Tour::random(n, rng);
            vec![seed; size]
        }
    }
}
