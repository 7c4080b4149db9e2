#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

use crate::models::{Coordinate, RoadGraph};
use crate::routing::DistanceOracle;
use crate::solver::RouteError;
use colony::prelude::*;
use std::sync::Arc;

/// A tour found over road network nodes.
#[derive(Clone, Debug)]
pub struct TourSolution {
    /// Closed sequence of node coordinates: the first one is repeated at the end.
    pub coordinates: Vec<Coordinate>,
    /// Closed sequence of dense node indices in graph encounter order.
    pub indices: Vec<usize>,
    /// Total tour distance in meters, measured along shortest paths.
    pub distance: Float,
    /// Search statistics.
    pub statistics: ColonyStatistics,
    /// Tour legs replaced by the nodes of their shortest paths, if requested.
    pub road_path: Option<Vec<Coordinate>>,
}

/// Finds a short closed tour which visits every node of the road network graph.
///
/// Nodes get dense indices in graph encounter order, so a start index refers to the n-th
/// node returned by [`RoadGraph::node_ids`].
pub struct TourOptimizer {
    config: ColonyConfig,
    environment: Arc<Environment>,
    telemetry: Option<TelemetryMode>,
    expand_path: bool,
}

impl TourOptimizer {
    /// Creates a new instance of `TourOptimizer`.
    pub fn new(config: ColonyConfig, environment: Arc<Environment>) -> Self {
        Self { config, environment, telemetry: None, expand_path: false }
    }

    /// Sets telemetry mode. By default, progress is logged using environment's logger.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = Some(mode);
        self
    }

    /// Specifies whether tour legs should be expanded into road paths.
    pub fn with_expand_path(mut self, expand_path: bool) -> Self {
        self.expand_path = expand_path;
        self
    }

    /// Runs the search over given graph.
    pub fn optimize(&self, graph: &RoadGraph) -> Result<TourSolution, RouteError> {
        self.config.validate()?;

        let nodes = graph.node_count();
        if nodes < 2 {
            return Err(RouteError::DegenerateGraph { nodes });
        }

        let oracle = DistanceOracle::new(graph);

        let colony = AntColony::new(&oracle, self.config.clone(), self.environment.clone());
        let colony = match &self.telemetry {
            Some(mode) => colony.with_telemetry(mode.clone()),
            None => colony,
        };

        let ColonySolution { tour, statistics } = colony.solve()?;

        let coordinates = tour.nodes.iter().filter_map(|&index| oracle.coordinate(index)).collect();
        let road_path = self.expand_path.then(|| expand_road_path(&oracle, tour.nodes.as_slice()));

        Ok(TourSolution { coordinates, indices: tour.nodes, distance: tour.distance, statistics, road_path })
    }
}

/// Replaces every leg of the tour by the nodes of its shortest path.
fn expand_road_path(oracle: &DistanceOracle, nodes: &[usize]) -> Vec<Coordinate> {
    let path = nodes.windows(2).fold(nodes.first().map(|&first| vec![first]).unwrap_or_default(), |mut path, leg| {
        if let Some(leg_path) = oracle.path(leg[0], leg[1]) {
            path.extend(leg_path.into_iter().skip(1));
        }
        path
    });

    path.into_iter().filter_map(|index| oracle.coordinate(index)).collect()
}
