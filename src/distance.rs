//! Cost matrix and closed-tour length evaluation.
//!
//! [`DistanceMatrix`] wraps a square, non-negative cost matrix shared
//! read-only by every component of the engine. Symmetry is not required:
//! the engine works with asymmetric costs, though typical road-distance
//! data is symmetric.

use crate::error::EvolveError;

/// A validated square matrix of travel costs between nodes.
///
/// Construction rejects empty, non-square, and negative-entry input, so
/// every method on an existing matrix can assume a well-formed table.
///
/// # Examples
///
/// ```
/// use evotsp::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0],
///     vec![2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.len(), 2);
/// assert_eq!(m.tour_length(&[0, 1]).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Builds a matrix from row-major cost data.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::EmptyMatrix`], [`EvolveError::NotSquare`],
    /// or [`EvolveError::NegativeCost`] on malformed input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, EvolveError> {
        let n = rows.len();
        if n == 0 {
            return Err(EvolveError::EmptyMatrix);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(EvolveError::NotSquare {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            for (j, &cost) in row.iter().enumerate() {
                if cost < 0.0 {
                    return Err(EvolveError::NegativeCost {
                        from: i,
                        to: j,
                        cost,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: an empty matrix cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Travel cost from node `from` to node `to`.
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Closed-tour cost of a route: the sum of consecutive edge costs
    /// plus the edge returning from the last stop to the first.
    ///
    /// A single-node route costs the self-loop entry (zero for a
    /// zero-diagonal matrix).
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::RouteLengthMismatch`] if the route does not
    /// visit exactly as many stops as the matrix has nodes.
    pub fn tour_length(&self, route: &[usize]) -> Result<f64, EvolveError> {
        if route.len() != self.len() {
            return Err(EvolveError::RouteLengthMismatch {
                expected: self.len(),
                actual: route.len(),
            });
        }
        Ok(self.closed_cost(route))
    }

    /// Closed-tour cost without the length check. The caller guarantees
    /// `route.len() == self.len()`.
    pub(crate) fn closed_cost(&self, route: &[usize]) -> f64 {
        let mut total = 0.0;
        for pair in route.windows(2) {
            total += self.rows[pair[0]][pair[1]];
        }
        total + self.rows[route[route.len() - 1]][route[0]]
    }
}
