#[cfg(test)]
#[path = "../../tests/unit/aco/termination_test.rs"]
mod termination_test;

/// An early stopping criteria: the search is terminated when no new best tour has been found
/// for more than a fifth of the iteration budget and more than half of the budget is spent.
pub struct EarlyStopping {
    patience: usize,
    warmup: usize,
    last_improvement: usize,
}

impl EarlyStopping {
    /// Creates a new instance of `EarlyStopping` for given iteration budget.
    pub fn new(num_iterations: usize) -> Self {
        Self { patience: num_iterations / 5, warmup: num_iterations / 2, last_improvement: 0 }
    }

    /// Tracks the outcome of zero-based `iteration`.
    pub fn track(&mut self, iteration: usize, is_improvement: bool) {
        if is_improvement {
            self.last_improvement = iteration;
        }
    }

    /// Returns the iteration when the last improvement was tracked.
    pub fn last_improvement(&self) -> usize {
        self.last_improvement
    }

    /// Returns true if the search should be stopped after zero-based `iteration`.
    pub fn is_termination(&self, iteration: usize) -> bool {
        iteration.saturating_sub(self.last_improvement) > self.patience && iteration > self.warmup
    }
}
