#[cfg(test)]
#[path = "../../tests/unit/solver/error_test.rs"]
mod error_test;

use colony::prelude::{ColonyError, GenericError};
use std::fmt::{Display, Formatter};

/// Specifies a stage of the route building pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Building a graph from segments.
    Build,
    /// Reducing graph size.
    Simplify,
    /// Searching for a tour.
    Optimize,
    /// Reading and validating configuration.
    Config,
}

impl Display for PipelineStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PipelineStage::Build => "build",
            PipelineStage::Simplify => "simplify",
            PipelineStage::Optimize => "optimize",
            PipelineStage::Config => "config",
        };

        write!(f, "{name}")
    }
}

/// Specifies reasons why a route cannot be built.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteError {
    /// There are no segments or no graph at the given stage.
    EmptyInput {
        /// A stage which has received no input.
        stage: PipelineStage,
    },
    /// Less than two nodes have reached the optimizer.
    DegenerateGraph {
        /// Amount of nodes.
        nodes: usize,
    },
    /// No ant has produced a complete tour with finite distance.
    NoValidTour {
        /// Amount of iterations run.
        iterations: usize,
    },
    /// Configuration cannot be read or has values out of their range.
    InvalidConfig(GenericError),
}

impl RouteError {
    /// Returns a pipeline stage where the error has happened.
    pub fn stage(&self) -> PipelineStage {
        match self {
            RouteError::EmptyInput { stage } => *stage,
            RouteError::DegenerateGraph { .. } | RouteError::NoValidTour { .. } => PipelineStage::Optimize,
            RouteError::InvalidConfig(_) => PipelineStage::Config,
        }
    }
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::EmptyInput { stage } => write!(f, "{stage}: no input to process"),
            RouteError::DegenerateGraph { nodes } => {
                write!(f, "optimize: cannot build a tour over {nodes} node(s), at least 2 are required")
            }
            RouteError::NoValidTour { iterations } => {
                write!(f, "optimize: no valid tour found in {iterations} iterations, is the graph connected?")
            }
            RouteError::InvalidConfig(err) => write!(f, "config: {err}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<ColonyError> for RouteError {
    fn from(err: ColonyError) -> Self {
        match err {
            ColonyError::DegenerateProblem { size } => RouteError::DegenerateGraph { nodes: size },
            ColonyError::NoValidTour { iterations, .. } => RouteError::NoValidTour { iterations },
        }
    }
}

impl From<GenericError> for RouteError {
    fn from(err: GenericError) -> Self {
        RouteError::InvalidConfig(err)
    }
}
