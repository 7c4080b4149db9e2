//! This module contains an ant colony optimization (ACO) engine for closed tour construction.
//!
//! # Algorithm
//!
//! On each iteration, every ant builds a closed tour starting from the same start node. At each
//! step, an ant chooses the next unvisited node `j` from its current node `i` with probability
//! proportional to `pheromone(i, j)^alpha * (1 / cost(i, j))^beta`. Transitions with infinite
//! cost are never chosen: an ant which has no finite transition left fails and its tour is
//! discarded. After all ants are done, the pheromone trail evaporates and each successful ant
//! deposits pheromone on the edges of its tour, inversely proportional to the tour distance.
//!
//! The best tour found across all iterations is tracked separately (elitism) and returned at
//! the end. The search stops when the iteration budget is exhausted or when no improvement is
//! found for a while (see [`EarlyStopping`]).

use crate::utils::Float;

mod ant;

mod colony;
pub use self::colony::*;

mod config;
pub use self::config::*;

mod pheromone;
pub use self::pheromone::PheromoneMatrix;

mod telemetry;
pub use self::telemetry::*;

mod termination;
pub use self::termination::EarlyStopping;

mod tour;
pub use self::tour::Tour;

/// Provides the way to get a cost of transition between two nodes identified by dense indices
/// in `[0, size)`.
///
/// Returned cost is expected to be non-negative. `Float::INFINITY` marks a forbidden transition.
pub trait TransitionCost: Send + Sync {
    /// Returns the total amount of nodes.
    fn size(&self) -> usize;

    /// Returns cost of transition from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> Float;
}

/// A transition cost backed by a dense square matrix.
pub struct MatrixCost {
    size: usize,
    values: Vec<Float>,
}

impl MatrixCost {
    /// Creates a new instance of `MatrixCost` from a row-major square matrix.
    /// Returns `None` if the matrix is not square.
    pub fn new(matrix: Vec<Vec<Float>>) -> Option<Self> {
        let size = matrix.len();
        if matrix.iter().any(|row| row.len() != size) {
            return None;
        }

        Some(Self { size, values: matrix.into_iter().flatten().collect() })
    }
}

impl TransitionCost for MatrixCost {
    fn size(&self) -> usize {
        self.size
    }

    fn cost(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }
}
