#[cfg(test)]
#[path = "../../tests/unit/aco/pheromone_test.rs"]
mod pheromone_test;

use crate::utils::Float;

/// A symmetric matrix of pheromone trail strength between every pair of nodes.
pub struct PheromoneMatrix {
    size: usize,
    min_value: Float,
    values: Vec<Float>,
}

impl PheromoneMatrix {
    /// Creates a new instance of `PheromoneMatrix` with all trails set to `initial` value.
    /// Trails never go below `min_value`.
    pub fn new(size: usize, initial: Float, min_value: Float) -> Self {
        let min_value = min_value.max(0.);

        Self { size, min_value, values: vec![initial.max(min_value); size * size] }
    }

    /// Returns the size of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns trail strength between two nodes.
    pub fn get(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    /// Evaporates all trails by given rate: each trail is multiplied by `1 - rate`.
    pub fn evaporate(&mut self, rate: Float) {
        let factor = 1. - rate.clamp(0., 1.);
        let min_value = self.min_value;

        self.values.iter_mut().for_each(|value| *value = (*value * factor).max(min_value));
    }

    /// Deposits given amount of pheromone on every leg of the closed node sequence.
    pub fn deposit(&mut self, nodes: &[usize], amount: Float) {
        if !amount.is_finite() || amount <= 0. {
            return;
        }

        nodes.windows(2).for_each(|leg| {
            let (from, to) = (leg[0], leg[1]);

            self.values[from * self.size + to] += amount;
            if from != to {
                self.values[to * self.size + from] += amount;
            }
        });
    }
}
