//! Contains the tour optimizer and the end-to-end route building pipeline.
//!
//! # Pipeline
//!
//! [`RouteSolver`] runs the following stages, logging each of them:
//!
//! - build a graph from segments
//! - simplify the graph, only when it exceeds the node budget
//! - resolve an optional start coordinate to the nearest node
//! - search for a tour using [`TourOptimizer`]
//!
//! # Examples
//!
//! ```
//! use powiat_core::prelude::*;
//! use std::sync::Arc;
//!
//! let segments = vec![
//!     vec![Coordinate::new(50., 19.), Coordinate::new(50.01, 19.), Coordinate::new(50.01, 19.01)],
//!     vec![Coordinate::new(50.01, 19.01), Coordinate::new(50., 19.01), Coordinate::new(50., 19.)],
//! ];
//!
//! let environment = Arc::new(Environment::new_with_seed(42).silent());
//! let solution = RouteSolver::new(environment)
//!     .with_colony_config(ColonyConfig::default().with_ants(5).with_iterations(10))
//!     .solve(&segments)
//!     .expect("cannot build a route");
//!
//! assert_eq!(solution.tour.coordinates.len(), 5);
//! assert_eq!(solution.tour.coordinates.first(), solution.tour.coordinates.last());
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/route_solver_test.rs"]
mod route_solver_test;

pub mod config;
use self::config::*;

mod error;
pub use self::error::*;

mod optimizer;
pub use self::optimizer::*;

use crate::construction::{GraphBuilder, Segment};
use crate::models::{Coordinate, DistanceMetric, GeodesicDistance, RoadGraph};
use crate::routing::NodeIndex;
use crate::simplification::{GraphSimplifier, SimplificationConfig, SimplificationReport};
use colony::prelude::*;
use std::sync::Arc;

/// Summarizes a road network graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStatistics {
    /// Amount of nodes.
    pub nodes: usize,
    /// Amount of edges.
    pub edges: usize,
    /// Sum of edge lengths in meters.
    pub total_length: Float,
}

impl From<&RoadGraph> for GraphStatistics {
    fn from(graph: &RoadGraph) -> Self {
        Self { nodes: graph.node_count(), edges: graph.edge_count(), total_length: graph.total_weight() }
    }
}

/// A result of the route building pipeline.
#[derive(Clone, Debug)]
pub struct RouteSolution {
    /// The tour found.
    pub tour: TourSolution,
    /// Statistics of the graph as it was built.
    pub raw_graph: GraphStatistics,
    /// Statistics of the graph used to search for the tour.
    pub graph: GraphStatistics,
    /// Simplification summary, if simplification was needed.
    pub simplification: Option<SimplificationReport>,
}

/// Builds a closed tour over road network segments.
pub struct RouteSolver {
    metric: Arc<dyn DistanceMetric>,
    colony: ColonyConfig,
    simplification: SimplificationConfig,
    environment: Arc<Environment>,
    telemetry: Option<TelemetryMode>,
    start: Option<Coordinate>,
    expand_path: bool,
}

impl RouteSolver {
    /// Creates a new instance of `RouteSolver` with default parameters.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self {
            metric: Arc::new(GeodesicDistance),
            colony: ColonyConfig::default(),
            simplification: SimplificationConfig::default(),
            environment,
            telemetry: None,
            start: None,
            expand_path: false,
        }
    }

    /// Creates a new instance of `RouteSolver` from config.
    pub fn from_config(config: &Config) -> Result<Self, RouteError> {
        let environment = Arc::new(create_environment(&config.environment, &config.telemetry));
        let telemetry = create_telemetry_mode(&config.telemetry, environment.logger.clone());

        Ok(Self::new(environment)
            .with_colony_config(create_colony_config(&config.colony)?)
            .with_simplification_config(create_simplification_config(&config.simplification)?)
            .with_start(create_start(&config.start)?)
            .with_expand_path(config.expand_path.unwrap_or(false))
            .with_telemetry(telemetry))
    }

    /// Sets a metric used to weight graph edges and to find the nearest node.
    pub fn with_metric(mut self, metric: Arc<dyn DistanceMetric>) -> Self {
        self.metric = metric;
        self
    }

    /// Sets ant colony config.
    pub fn with_colony_config(mut self, config: ColonyConfig) -> Self {
        self.colony = config;
        self
    }

    /// Sets simplification config.
    pub fn with_simplification_config(mut self, config: SimplificationConfig) -> Self {
        self.simplification = config;
        self
    }

    /// Sets a start coordinate. The tour starts from the nearest graph node, which overrides
    /// the start index of colony config.
    pub fn with_start(mut self, start: Option<Coordinate>) -> Self {
        self.start = start;
        self
    }

    /// Specifies whether tour legs should be expanded into road paths.
    pub fn with_expand_path(mut self, expand_path: bool) -> Self {
        self.expand_path = expand_path;
        self
    }

    /// Sets telemetry mode of the optimizer.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = Some(mode);
        self
    }

    /// Builds a graph from segments and searches for a tour over it.
    pub fn solve(&self, segments: &[Segment]) -> Result<RouteSolution, RouteError> {
        if segments.is_empty() {
            self.log("no segments provided");
            return Err(RouteError::EmptyInput { stage: PipelineStage::Build });
        }

        let timer = Timer::start();
        self.log(&format!("building graph from {} segments", segments.len()));

        let graph = GraphBuilder::new(self.metric.clone())
            .with_logger(self.environment.logger.clone())
            .build(segments)
            .ok_or(RouteError::EmptyInput { stage: PipelineStage::Build })?;

        self.log(&format!("[{}ms] graph is built", timer.elapsed_millis()));

        self.solve_graph(&graph)
    }

    /// Searches for a tour over an already built graph. The graph is not modified.
    pub fn solve_graph(&self, graph: &RoadGraph) -> Result<RouteSolution, RouteError> {
        self.colony.validate()?;

        let timer = Timer::start();
        let raw_graph = GraphStatistics::from(graph);

        let (graph, simplification) = self.simplify(graph)?;

        let colony = match self.resolve_start(&graph) {
            Some(index) => self.colony.clone().with_start_index(Some(index)),
            None => self.colony.clone(),
        };

        self.log(&format!("searching for a tour over {} nodes", graph.node_count()));

        let optimizer = TourOptimizer::new(colony, self.environment.clone()).with_expand_path(self.expand_path);
        let optimizer = match &self.telemetry {
            Some(mode) => optimizer.with_telemetry(mode.clone()),
            None => optimizer,
        };

        let tour = optimizer.optimize(&graph).inspect_err(|err| self.log(&format!("cannot find a tour: {err}")))?;

        self.log(&format!(
            "[{}ms] found a tour over {} nodes, total distance: {:.2} km",
            timer.elapsed_millis(),
            graph.node_count(),
            tour.distance / 1000.
        ));

        Ok(RouteSolution { tour, raw_graph, graph: GraphStatistics::from(&graph), simplification })
    }

    fn simplify(&self, graph: &RoadGraph) -> Result<(RoadGraph, Option<SimplificationReport>), RouteError> {
        if graph.is_empty() {
            self.log("no graph to simplify");
            return Err(RouteError::EmptyInput { stage: PipelineStage::Simplify });
        }

        let simplifier =
            GraphSimplifier::new(self.simplification.clone()).with_logger(self.environment.logger.clone());

        if !simplifier.is_required(graph) {
            return Ok((graph.clone(), None));
        }

        self.log(&format!(
            "graph is too large ({} nodes), simplifying to approximately {} nodes",
            graph.node_count(),
            self.simplification.max_nodes
        ));

        let (graph, report) = simplifier.simplify(graph);

        Ok((graph, Some(report)))
    }

    /// Returns dense index of the node nearest to the start coordinate.
    fn resolve_start(&self, graph: &RoadGraph) -> Option<usize> {
        let start = self.start?;
        let node = graph.find_nearest(&start, self.metric.as_ref())?;
        let index = NodeIndex::new(graph).dense(node)?;

        if let Some(coordinate) = graph.coordinate(node) {
            self.log(&format!(
                "start location {start} resolved to node {index} at {coordinate}, {:.2}m away",
                self.metric.distance(&start, &coordinate)
            ));
        }

        Some(index)
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}
