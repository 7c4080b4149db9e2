#[cfg(test)]
#[path = "../../tests/unit/aco/colony_test.rs"]
mod colony_test;

use super::ant::{Ant, AntOutcome, ConstructionContext, MIN_DISTANCE};
use super::telemetry::Telemetry;
use super::*;
use crate::utils::{Environment, Float, RandomGen, map_collect};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Specifies how the start node was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartSelection {
    /// A start node was given explicitly.
    Fixed(usize),
    /// A start node was chosen randomly as none was given.
    Random(usize),
    /// A requested start node was out of range and was replaced by a random one.
    Substituted {
        /// A requested start node index.
        requested: usize,
        /// A randomly chosen start node index.
        chosen: usize,
    },
}

impl StartSelection {
    /// Returns the start node index actually used.
    pub fn index(&self) -> usize {
        match self {
            StartSelection::Fixed(index) | StartSelection::Random(index) => *index,
            StartSelection::Substituted { chosen, .. } => *chosen,
        }
    }
}

/// Keeps essential information about colony run.
#[derive(Clone, Debug)]
pub struct ColonyStatistics {
    /// Amount of iterations run.
    pub iterations: usize,
    /// Zero-based iteration when the best tour was found.
    pub last_improvement: usize,
    /// True if the search was stopped before exhausting iteration budget.
    pub early_stopped: bool,
    /// Amount of ants which failed to build a complete tour across all iterations.
    pub failed_ants: usize,
    /// Total amount of constructed ants.
    pub total_ants: usize,
    /// How the start node was selected.
    pub start: StartSelection,
    /// Duration of the search in milliseconds.
    pub duration: u128,
}

/// A result of ant colony search.
#[derive(Clone, Debug)]
pub struct ColonySolution {
    /// The best tour found.
    pub tour: Tour,
    /// Search statistics.
    pub statistics: ColonyStatistics,
}

/// Specifies reasons why ant colony search can fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ColonyError {
    /// The problem has less than two nodes.
    DegenerateProblem {
        /// Amount of nodes in the problem.
        size: usize,
    },
    /// No ant has produced a complete tour with finite distance.
    NoValidTour {
        /// Amount of iterations run.
        iterations: usize,
        /// Amount of failed ants.
        failed_ants: usize,
    },
}

impl Display for ColonyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColonyError::DegenerateProblem { size } => {
                write!(f, "at least two nodes are required to build a tour, got {size}")
            }
            ColonyError::NoValidTour { iterations, failed_ants } => write!(
                f,
                "no complete tour with finite distance found in {iterations} iterations ({failed_ants} ants failed)"
            ),
        }
    }
}

impl std::error::Error for ColonyError {}

/// An ant colony optimization engine which searches for the shortest closed tour visiting all
/// nodes exactly once.
pub struct AntColony<'a> {
    cost: &'a dyn TransitionCost,
    config: ColonyConfig,
    environment: Arc<Environment>,
    telemetry: Telemetry,
}

impl<'a> AntColony<'a> {
    /// Creates a new instance of `AntColony`. By default, it logs progress every 10 iterations
    /// using environment's logger.
    pub fn new(cost: &'a dyn TransitionCost, config: ColonyConfig, environment: Arc<Environment>) -> Self {
        let telemetry = Telemetry::new(TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_best: 10 });

        Self { cost, config, environment, telemetry }
    }

    /// Sets telemetry mode.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = Telemetry::new(mode);
        self
    }

    /// Runs the search and returns the best tour found.
    pub fn solve(mut self) -> Result<ColonySolution, ColonyError> {
        let size = self.cost.size();
        if size < 2 {
            self.telemetry.log(&format!("cannot build a tour: the problem has {size} node(s)"));
            return Err(ColonyError::DegenerateProblem { size });
        }

        self.telemetry.start();

        let start = self.select_start(size);
        let num_iterations = self.config.num_iterations;
        let num_ants = self.config.num_ants;

        self.telemetry.log(&format!(
            "starting ant colony for {size} nodes with {num_ants} ants and {num_iterations} iterations, start node: {}",
            start.index()
        ));

        let mut pheromone = PheromoneMatrix::new(size, self.config.initial_pheromone, self.config.min_pheromone);
        let mut early_stopping = EarlyStopping::new(num_iterations);
        let mut best: Option<Tour> = None;
        let mut failed_ants = 0;
        let mut iterations = 0;
        let mut early_stopped = false;

        for iteration in 0..num_iterations {
            let tours = self.construct_tours(start.index(), &pheromone);
            let iteration_failed = num_ants - tours.len();
            failed_ants += iteration_failed;

            let is_improvement = Self::track_best(&mut best, tours.as_slice());

            self.update_pheromone(&mut pheromone, tours.as_slice(), best.as_ref());

            iterations = iteration + 1;
            early_stopping.track(iteration, is_improvement);

            self.telemetry.on_iteration(&IterationProgress {
                iteration: iterations,
                total: num_iterations,
                best_distance: best.as_ref().map(|tour| tour.distance),
                is_improvement,
                failed_ants: iteration_failed,
            });

            if early_stopping.is_termination(iteration) {
                self.telemetry.log(&format!(
                    "stopping early at iteration {iterations}/{num_iterations}: no improvement for {} iterations",
                    iteration - early_stopping.last_improvement()
                ));
                early_stopped = true;
                break;
            }
        }

        let statistics = ColonyStatistics {
            iterations,
            last_improvement: early_stopping.last_improvement(),
            early_stopped,
            failed_ants,
            total_ants: iterations * num_ants,
            start,
            duration: self.telemetry.elapsed_millis(),
        };

        match best {
            Some(mut tour) => {
                tour.close();
                self.telemetry.log(&format!(
                    "ant colony finished in {}ms after {iterations} iterations, best distance: {:.2}",
                    statistics.duration, tour.distance
                ));

                Ok(ColonySolution { tour, statistics })
            }
            None => {
                self.telemetry.log(&format!("ant colony failed: no valid tour found in {iterations} iterations"));

                Err(ColonyError::NoValidTour { iterations, failed_ants })
            }
        }
    }

    fn select_start(&self, size: usize) -> StartSelection {
        let random_index = || self.environment.random.uniform_int(0, size as i32 - 1) as usize;

        match self.config.start_index {
            Some(index) if index < size => StartSelection::Fixed(index),
            Some(requested) => {
                let chosen = random_index();
                self.telemetry.log(&format!(
                    "warning: invalid start node index {requested} for {size} nodes, using random node {chosen}"
                ));

                StartSelection::Substituted { requested, chosen }
            }
            None => StartSelection::Random(random_index()),
        }
    }

    /// Runs construction phase: returns complete tours with finite distance in ant order.
    fn construct_tours(&self, start: usize, pheromone: &PheromoneMatrix) -> Vec<Tour> {
        let size = self.cost.size();
        let ctx = ConstructionContext { cost: self.cost, pheromone, alpha: self.config.alpha, beta: self.config.beta };

        // NOTE generators are forked sequentially to keep results reproducible with parallel construction
        let generators: Vec<RandomGen> =
            (0..self.config.num_ants).map(|_| self.environment.random.get_rng()).collect();

        map_collect(generators, self.environment.parallel, |mut rng| Ant::new(start, size).construct(&ctx, &mut rng))
            .into_iter()
            .filter_map(|outcome| match outcome {
                AntOutcome::Complete(tour) if tour.is_complete(size) && tour.is_feasible() => Some(tour),
                _ => None,
            })
            .collect()
    }

    /// Updates the best known tour, returns true if it was improved.
    fn track_best(best: &mut Option<Tour>, tours: &[Tour]) -> bool {
        tours.iter().fold(false, |is_improvement, tour| {
            if best.as_ref().is_none_or(|best| tour.distance < best.distance) {
                *best = Some(tour.clone());
                true
            } else {
                is_improvement
            }
        })
    }

    fn update_pheromone(&self, pheromone: &mut PheromoneMatrix, tours: &[Tour], best: Option<&Tour>) {
        let deposit = |tour: &Tour| self.config.deposit_factor / tour.distance.max(MIN_DISTANCE);

        pheromone.evaporate(self.config.evaporation_rate);

        tours.iter().for_each(|tour| pheromone.deposit(tour.nodes.as_slice(), deposit(tour)));

        if let Some(best) = best.filter(|_| self.config.elite_weight > 0.) {
            pheromone.deposit(best.nodes.as_slice(), self.config.elite_weight * deposit(best));
        }
    }
}

/// A helper function which returns a cost of the closed node sequence.
pub fn get_tour_distance(cost: &dyn TransitionCost, nodes: &[usize]) -> Float {
    nodes.windows(2).map(|leg| cost.cost(leg[0], leg[1])).sum()
}
