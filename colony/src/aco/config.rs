#[cfg(test)]
#[path = "../../tests/unit/aco/config_test.rs"]
mod config_test;

use crate::utils::{Float, GenericResult};

/// A configuration which controls ant colony execution.
#[derive(Clone, Debug)]
pub struct ColonyConfig {
    /// Amount of ants constructed on each iteration. Default is 10.
    pub num_ants: usize,
    /// Iteration budget, also a baseline for early stopping. Default is 100.
    pub num_iterations: usize,
    /// Pheromone exponent in transition probability. Default is 1.
    pub alpha: Float,
    /// Heuristic (inverse distance) exponent in transition probability. Default is 3.
    pub beta: Float,
    /// A fraction of pheromone removed on each iteration. Default is 0.8.
    pub evaporation_rate: Float,
    /// A uniform pheromone baseline. Default is 0.01.
    pub initial_pheromone: Float,
    /// A pheromone amount `q` spread by an ant as `q / tour_distance`. Default is 1.
    pub deposit_factor: Float,
    /// A weight of additional deposit done by the best known tour. Default is 0 (disabled).
    pub elite_weight: Float,
    /// A lower bound of trail strength. Default is 1E-12.
    pub min_pheromone: Float,
    /// A fixed start node. If omitted or out of range, the start node is chosen randomly.
    pub start_index: Option<usize>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 100,
            alpha: 1.,
            beta: 3.,
            evaporation_rate: 0.8,
            initial_pheromone: 0.01,
            deposit_factor: 1.,
            elite_weight: 0.,
            min_pheromone: 1E-12,
            start_index: None,
        }
    }
}

impl ColonyConfig {
    /// Sets amount of ants per iteration.
    pub fn with_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets iteration budget.
    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    /// Sets pheromone and heuristic exponents.
    pub fn with_exponents(mut self, alpha: Float, beta: Float) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets evaporation rate.
    pub fn with_evaporation_rate(mut self, evaporation_rate: Float) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Sets start node index.
    pub fn with_start_index(mut self, start_index: Option<usize>) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets elite weight.
    pub fn with_elite_weight(mut self, elite_weight: Float) -> Self {
        self.elite_weight = elite_weight;
        self
    }

    /// Checks that parameters are in their valid ranges.
    pub fn validate(&self) -> GenericResult<()> {
        let errors = [
            (self.num_ants == 0).then_some("amount of ants should be positive"),
            (self.num_iterations == 0).then_some("amount of iterations should be positive"),
            (!is_non_negative(self.alpha)).then_some("alpha should be a non-negative number"),
            (!is_non_negative(self.beta)).then_some("beta should be a non-negative number"),
            (!(0. ..=1.).contains(&self.evaporation_rate)).then_some("evaporation rate should be in [0, 1] range"),
            (!(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.))
                .then_some("initial pheromone should be a positive number"),
            (!(self.deposit_factor.is_finite() && self.deposit_factor > 0.))
                .then_some("deposit factor should be a positive number"),
            (!is_non_negative(self.elite_weight)).then_some("elite weight should be a non-negative number"),
            (!is_non_negative(self.min_pheromone)).then_some("min pheromone should be a non-negative number"),
        ];

        let errors = errors.into_iter().flatten().collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(format!("invalid colony config: {}", errors.join(", ")).into()) }
    }
}

fn is_non_negative(value: Float) -> bool {
    value.is_finite() && value >= 0.
}
