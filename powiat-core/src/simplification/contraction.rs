use crate::models::{NodeId, RoadGraph};

/// Replaces pass-through nodes by a single edge between their neighbours until the graph fits
/// into `max_nodes`. Returns amount of contracted nodes.
///
/// A candidate is skipped if it no longer has exactly two distinct neighbours. The new edge
/// weight is a sum of the cheapest parallel edges to each neighbour, other parallel edges are
/// dropped together with the node.
pub(crate) fn contract_pass_through(graph: &mut RoadGraph, candidates: &[NodeId], max_nodes: usize) -> usize {
    let mut contracted = 0;

    for &node in candidates {
        if graph.node_count() <= max_nodes {
            break;
        }

        if !graph.contains_node(node) {
            continue;
        }

        let neighbours = graph.neighbours(node);
        let &[left, right] = neighbours.as_slice() else { continue };

        let (Some(left_weight), Some(right_weight)) = (graph.min_weight(node, left), graph.min_weight(node, right))
        else {
            continue;
        };

        graph.add_edge_between(left, right, left_weight + right_weight);
        graph.remove_node(node);

        contracted += 1;
    }

    contracted
}
