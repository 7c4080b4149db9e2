//! This module reimports a common used types.

pub use crate::construction::{GraphBuilder, Segment};
pub use crate::models::{Coordinate, DistanceMetric, GeodesicDistance, HaversineDistance, RoadGraph};
pub use crate::routing::DistanceOracle;
pub use crate::simplification::{GraphSimplifier, SimplificationConfig, SimplificationReport};
pub use crate::solver::{PipelineStage, RouteError, RouteSolution, RouteSolver, TourOptimizer, TourSolution};

pub use colony::prelude::{ColonyConfig, Environment, Float, InfoLogger, TelemetryMode};
