use crate::models::RoadGraph;

/// Removes nodes with the lowest degree until the graph fits into `max_nodes`. Degrees are
/// taken once before removal, ties keep encounter order. Returns amount of removed nodes.
///
/// Connectivity is not preserved.
pub(crate) fn prune_least_connected(graph: &mut RoadGraph, max_nodes: usize) -> usize {
    let excess = graph.node_count().saturating_sub(max_nodes);
    if excess == 0 {
        return 0;
    }

    let mut ranked = graph.node_ids().map(|node| (node, graph.degree(node))).collect::<Vec<_>>();
    ranked.sort_by_key(|(_, degree)| *degree);

    ranked.into_iter().take(excess).filter(|(node, _)| graph.remove_node(*node).is_some()).count()
}

/// Removes nodes without edges. Returns amount of removed nodes.
pub(crate) fn remove_isolated(graph: &mut RoadGraph) -> usize {
    let isolated = graph.node_ids().filter(|&node| graph.degree(node) == 0).collect::<Vec<_>>();

    isolated.into_iter().filter(|&node| graph.remove_node(node).is_some()).count()
}
