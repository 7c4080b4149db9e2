#[cfg(test)]
#[path = "../../tests/unit/aco/ant_test.rs"]
mod ant_test;

use super::{PheromoneMatrix, Tour, TransitionCost};
use crate::utils::{Float, RandomGen, compare_floats, sample_weighted};

/// A distance used instead of zero to keep the inverse distance heuristic finite.
pub(crate) const MIN_DISTANCE: Float = 1E-6;

/// Keeps read-only data shared by all ants during construction phase.
pub(crate) struct ConstructionContext<'a> {
    pub cost: &'a dyn TransitionCost,
    pub pheromone: &'a PheromoneMatrix,
    pub alpha: Float,
    pub beta: Float,
}

/// A result of a single ant walk.
#[derive(Debug)]
pub(crate) enum AntOutcome {
    /// The ant has visited all nodes and returned to the start.
    Complete(Tour),
    /// The ant got stuck: no finite transition was left after visiting given amount of nodes.
    Failed { visited: usize },
}

/// Keeps the state of a single ant during one construction walk.
pub(crate) struct Ant {
    start: usize,
    current: usize,
    visited: Vec<bool>,
    tour: Vec<usize>,
    distance: Float,
}

impl Ant {
    /// Creates a new ant placed at `start` node.
    pub fn new(start: usize, size: usize) -> Self {
        let mut visited = vec![false; size];
        visited[start] = true;

        let mut tour = Vec::with_capacity(size + 1);
        tour.push(start);

        Self { start, current: start, visited, tour, distance: 0. }
    }

    /// Walks through all nodes and returns to the start node.
    pub fn construct(mut self, ctx: &ConstructionContext, rng: &mut RandomGen) -> AntOutcome {
        let size = self.visited.len();

        while self.tour.len() < size {
            match self.choose_next(ctx, rng) {
                Some((next, distance)) => self.move_to(next, distance),
                None => return AntOutcome::Failed { visited: self.tour.len() },
            }
        }

        let closing = ctx.cost.cost(self.current, self.start);
        if !closing.is_finite() {
            return AntOutcome::Failed { visited: self.tour.len() };
        }

        self.tour.push(self.start);
        self.distance += closing;

        AntOutcome::Complete(Tour { nodes: self.tour, distance: self.distance })
    }

    fn move_to(&mut self, next: usize, distance: Float) {
        self.visited[next] = true;
        self.tour.push(next);
        self.current = next;
        self.distance += distance;
    }

    /// Chooses next node among unvisited ones reachable with finite cost.
    fn choose_next(&self, ctx: &ConstructionContext, rng: &mut RandomGen) -> Option<(usize, Float)> {
        let candidates = self
            .visited
            .iter()
            .enumerate()
            .filter(|(_, is_visited)| !**is_visited)
            .map(|(node, _)| (node, ctx.cost.cost(self.current, node)))
            .filter(|(_, distance)| distance.is_finite())
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return None;
        }

        let weights = candidates
            .iter()
            .map(|&(node, distance)| {
                let pheromone = ctx.pheromone.get(self.current, node).powf(ctx.alpha);
                let heuristic = (1. / distance.max(MIN_DISTANCE)).powf(ctx.beta);

                pheromone * heuristic
            })
            .collect::<Vec<_>>();

        let index = sample_weighted(weights.as_slice(), rng).unwrap_or_else(|| {
            // NOTE all weights underflowed: fallback to the nearest candidate
            candidates
                .iter()
                .enumerate()
                .min_by(|(_, (_, a)), (_, (_, b))| compare_floats(*a, *b))
                .map(|(index, _)| index)
                .unwrap_or(0)
        });

        candidates.get(index).copied()
    }
}
