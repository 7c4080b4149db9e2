#[cfg(test)]
#[path = "../../tests/unit/construction/builder_test.rs"]
mod builder_test;

use crate::models::{Coordinate, DistanceMetric, GeodesicDistance, RoadGraph};
use colony::prelude::{InfoLogger, Timer};
use std::sync::Arc;

/// A polyline: an ordered sequence of coordinates connected by straight road pieces.
pub type Segment = Vec<Coordinate>;

/// Specifies how often (in processed segments) the build progress is logged.
const LOG_PROGRESS_STEP: usize = 100;

/// Builds a road network multigraph from polylines.
pub struct GraphBuilder {
    metric: Arc<dyn DistanceMetric>,
    logger: Option<InfoLogger>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(Arc::new(GeodesicDistance))
    }
}

impl GraphBuilder {
    /// Creates a new instance of `GraphBuilder` which weights edges using given metric.
    pub fn new(metric: Arc<dyn DistanceMetric>) -> Self {
        Self { metric, logger: None }
    }

    /// Sets a logger to report build progress.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds a graph with one edge per pair of consecutive distinct points of every segment.
    /// Segments with less than two points are ignored.
    ///
    /// Returns `None` when input is empty or the resulting graph has no edges.
    pub fn build(&self, segments: &[Segment]) -> Option<RoadGraph> {
        if segments.is_empty() {
            self.log("no segments to build the graph from");
            return None;
        }

        let timer = Timer::start();
        let total = segments.len();

        let (graph, processed) = segments.iter().filter(|segment| segment.len() >= 2).fold(
            (RoadGraph::new(), 0_usize),
            |(mut graph, processed), segment| {
                segment.windows(2).for_each(|pair| {
                    let (from, to) = (pair[0], pair[1]);
                    if from != to {
                        graph.add_edge(from, to, self.metric.distance(&from, &to));
                    }
                });

                let processed = processed + 1;
                if processed % LOG_PROGRESS_STEP == 0 {
                    self.log(&format!("processed {processed}/{total} segments"));
                }

                (graph, processed)
            },
        );

        self.log(&format!(
            "[{}ms] processed {} segments, graph has {} nodes and {} edges",
            timer.elapsed_millis(),
            processed,
            graph.node_count(),
            graph.edge_count()
        ));

        if graph.node_count() == 0 || graph.edge_count() == 0 {
            self.log("segments produced no edges");
            None
        } else {
            Some(graph)
        }
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(message)
        }
    }
}
