//! Contains logic to reduce road network size while keeping its topology.
//!
//! Simplification runs in three phases on a working copy of the graph:
//!
//! - contraction of pass-through nodes (exactly two distinct neighbours), which are replaced by a
//!   single edge between the neighbours with a weight equal to the sum of cheapest connections
//! - pruning of the least connected nodes when contraction was not enough to fit the budget
//! - cleanup of nodes left without any edge

#[cfg(test)]
#[path = "../../tests/unit/simplification/simplifier_test.rs"]
mod simplifier_test;

mod contraction;
use self::contraction::contract_pass_through;

mod pruning;
use self::pruning::{prune_least_connected, remove_isolated};

use crate::models::{NodeId, RoadGraph};
use colony::prelude::{InfoLogger, Timer};
use std::fmt::{Display, Formatter};

/// A configuration of graph simplification.
#[derive(Clone, Debug)]
pub struct SimplificationConfig {
    /// Target amount of nodes. Default is 500.
    pub max_nodes: usize,
    /// Nodes with degree equal or above are junctions which are never contracted. Default is 3.
    pub junction_degree_threshold: usize,
}

impl Default for SimplificationConfig {
    fn default() -> Self {
        Self { max_nodes: 500, junction_degree_threshold: 3 }
    }
}

/// Specifies a role of the node in the road network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    /// An intersection, never contracted.
    Junction,
    /// A node in the middle of a road, a contraction candidate.
    PassThrough,
    /// Dead end or any other node.
    Other,
}

/// Summarizes changes done by simplification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimplificationReport {
    /// Amount of nodes in the source graph.
    pub nodes_before: usize,
    /// Amount of edges in the source graph.
    pub edges_before: usize,
    /// Amount of nodes in the simplified graph.
    pub nodes_after: usize,
    /// Amount of edges in the simplified graph.
    pub edges_after: usize,
    /// Amount of contracted pass-through nodes.
    pub contracted: usize,
    /// Amount of nodes removed by pruning.
    pub pruned: usize,
    /// Amount of nodes removed as isolated.
    pub isolated: usize,
}

impl Display for SimplificationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes: {} -> {}, edges: {} -> {} (contracted: {}, pruned: {}, isolated: {})",
            self.nodes_before,
            self.nodes_after,
            self.edges_before,
            self.edges_after,
            self.contracted,
            self.pruned,
            self.isolated
        )
    }
}

/// Reduces a road network graph to a given amount of nodes.
pub struct GraphSimplifier {
    config: SimplificationConfig,
    logger: Option<InfoLogger>,
}

impl GraphSimplifier {
    /// Creates a new instance of `GraphSimplifier`.
    pub fn new(config: SimplificationConfig) -> Self {
        Self { config, logger: None }
    }

    /// Sets a logger to report simplification progress.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Checks whether the graph exceeds the node budget.
    pub fn is_required(&self, graph: &RoadGraph) -> bool {
        graph.node_count() > self.config.max_nodes
    }

    /// Returns a simplified copy of the graph. The source graph is not modified.
    ///
    /// A graph which already fits the budget is returned as an unmodified copy.
    pub fn simplify(&self, graph: &RoadGraph) -> (RoadGraph, SimplificationReport) {
        let mut report = SimplificationReport {
            nodes_before: graph.node_count(),
            edges_before: graph.edge_count(),
            ..SimplificationReport::default()
        };

        if !self.is_required(graph) {
            report.nodes_after = report.nodes_before;
            report.edges_after = report.edges_before;
            return (graph.clone(), report);
        }

        let timer = Timer::start();
        let max_nodes = self.config.max_nodes;
        let mut working = graph.clone();

        let candidates = classify_nodes(&working, self.config.junction_degree_threshold)
            .into_iter()
            .filter_map(|(node, class)| (class == NodeClass::PassThrough).then_some(node))
            .collect::<Vec<_>>();

        report.contracted = contract_pass_through(&mut working, &candidates, max_nodes);
        self.log(&format!(
            "contracted {} of {} pass-through nodes, {} nodes left",
            report.contracted,
            candidates.len(),
            working.node_count()
        ));

        report.pruned = prune_least_connected(&mut working, max_nodes);
        if report.pruned > 0 {
            self.log(&format!("pruned {} least connected nodes", report.pruned));
        }

        report.isolated = remove_isolated(&mut working);

        let simplified = working.compact();
        report.nodes_after = simplified.node_count();
        report.edges_after = simplified.edge_count();

        self.log(&format!("[{}ms] simplified graph, {report}", timer.elapsed_millis()));

        (simplified, report)
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(message)
        }
    }
}

/// Classifies every node of the graph in encounter order.
pub fn classify_nodes(graph: &RoadGraph, junction_degree_threshold: usize) -> Vec<(NodeId, NodeClass)> {
    graph
        .node_ids()
        .map(|node| {
            let degree = graph.degree(node);
            let class = if degree >= junction_degree_threshold {
                NodeClass::Junction
            } else if degree == 2 {
                NodeClass::PassThrough
            } else {
                NodeClass::Other
            };

            (node, class)
        })
        .collect()
}
