use super::*;
use crate::helpers::models::*;
use colony::prelude::Float;

fn simplify(graph: &RoadGraph, max_nodes: usize) -> (RoadGraph, SimplificationReport) {
    GraphSimplifier::new(SimplificationConfig { max_nodes, ..SimplificationConfig::default() }).simplify(graph)
}

fn get_weights(graph: &RoadGraph) -> Vec<Float> {
    graph.edges().map(|edge| edge.weight).collect()
}

#[test]
fn can_return_unmodified_copy_when_graph_fits() {
    let graph = create_path_graph(&[1., 2., 3.]);

    let (simplified, report) = simplify(&graph, 4);

    assert_eq!(simplified.coordinates().collect::<Vec<_>>(), graph.coordinates().collect::<Vec<_>>());
    assert_eq!(get_weights(&simplified), vec![1., 2., 3.]);
    assert_eq!(
        report,
        SimplificationReport { nodes_before: 4, edges_before: 3, nodes_after: 4, edges_after: 3, ..Default::default() }
    );
}

#[test]
fn can_contract_path_into_single_edge() {
    let graph = create_path_graph(&[1., 2., 3.]);

    let (simplified, report) = simplify(&graph, 2);

    assert_eq!(simplified.coordinates().collect::<Vec<_>>(), vec![node(0), node(3)]);
    assert_eq!(get_weights(&simplified), vec![6.]);
    assert_eq!(report.contracted, 2);
    assert_eq!(report.pruned, 0);
    assert_eq!(report.isolated, 0);
    assert_eq!(graph.node_count(), 4);
}

#[test]
fn can_stop_contraction_when_budget_is_met() {
    let graph = create_path_graph(&[1., 2., 3., 4.]);

    let (simplified, report) = simplify(&graph, 4);

    assert_eq!(report.contracted, 1);
    assert_eq!(simplified.coordinates().collect::<Vec<_>>(), vec![node(0), node(2), node(3), node(4)]);
    assert_eq!(get_weights(&simplified), vec![3., 4., 3.]);
}

#[test]
fn can_keep_junctions() {
    // NOTE node 0 is a junction, leaves have degree 1
    let graph = create_graph(&[(0, 1, 1.), (0, 2, 1.), (0, 3, 1.), (3, 4, 1.)]);

    let (simplified, report) = simplify(&graph, 4);

    assert_eq!(report.contracted, 1);
    assert!(simplified.node_id(&node(3)).is_none());
    let (Some(junction), Some(leaf)) = (simplified.node_id(&node(0)), simplified.node_id(&node(4))) else {
        unreachable!("nodes should be kept")
    };
    assert_eq!(simplified.min_weight(junction, leaf), Some(2.));
}

#[test]
fn can_skip_node_with_single_distinct_neighbour() {
    let graph = create_graph(&[(0, 1, 1.), (1, 2, 2.), (2, 0, 3.)]);

    let (simplified, report) = simplify(&graph, 1);

    assert_eq!(report.contracted, 1);
    assert_eq!(report.pruned, 1);
    assert_eq!(report.isolated, 1);
    assert!(simplified.is_empty());
}

#[test]
fn can_create_parallel_edges_on_contraction() {
    let graph = create_graph(&[(0, 1, 1.), (1, 2, 2.), (2, 0, 3.)]);

    let (simplified, report) = simplify(&graph, 2);

    assert_eq!(report.contracted, 1);
    assert_eq!(simplified.node_count(), 2);
    assert_eq!(get_weights(&simplified), vec![2., 4.]);
    assert_eq!(simplified.min_weight(0, 1), Some(2.));
}

#[test]
fn can_prune_least_connected_nodes() {
    let graph = create_grid_graph(3, 3);

    let (simplified, report) = simplify(&graph, 4);

    assert_eq!(report.contracted, 4);
    assert_eq!(report.pruned, 1);
    assert_eq!(report.isolated, 0);
    assert_eq!(simplified.node_count(), 4);
    assert!(simplified.node_id(&coord(1., 1.)).is_some());
}

#[test]
fn can_remove_isolated_nodes_after_pruning() {
    let graph = create_graph(&[(0, 1, 1.), (2, 3, 1.), (2, 4, 1.), (2, 5, 1.)]);

    let (simplified, report) = simplify(&graph, 5);

    assert_eq!(report.pruned, 1);
    assert_eq!(report.isolated, 1);
    assert_eq!(simplified.coordinates().collect::<Vec<_>>(), vec![node(2), node(3), node(4), node(5)]);
    assert_eq!(
        (report.nodes_before, report.edges_before, report.nodes_after, report.edges_after),
        (6, 4, 4, 3)
    );
}

parameterized_test! {can_classify_nodes, (threshold, expected), {
    let graph = create_graph(&[(0, 1, 1.), (0, 2, 1.), (0, 3, 1.), (3, 4, 1.)]);

    let classes = classify_nodes(&graph, threshold).into_iter().map(|(_, class)| class).collect::<Vec<_>>();

    assert_eq!(classes, expected);
}}

can_classify_nodes! {
    case01_default: (3, vec![NodeClass::Junction, NodeClass::Other, NodeClass::Other, NodeClass::PassThrough, NodeClass::Other]),
    case02_low_threshold: (2, vec![NodeClass::Junction, NodeClass::Other, NodeClass::Other, NodeClass::Junction, NodeClass::Other]),
    case03_high_threshold: (4, vec![NodeClass::Other, NodeClass::Other, NodeClass::Other, NodeClass::PassThrough, NodeClass::Other]),
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn graph_strategy() -> impl Strategy<Value = RoadGraph> {
        prop::collection::vec((0..12_usize, 0..12_usize, 0.0..100.0f64), 1..30)
            .prop_map(|edges| create_graph(edges.as_slice()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn can_keep_simplifier_invariants(graph in graph_strategy(), max_nodes in 2..12_usize) {
            let (simplified, report) = simplify(&graph, max_nodes);

            prop_assert!(simplified.node_count() <= graph.node_count());
            if graph.node_count() > max_nodes {
                prop_assert!(simplified.node_count() <= max_nodes);
            }
            prop_assert!(simplified.node_ids().all(|node| simplified.degree(node) > 0));
            prop_assert_eq!(report.nodes_after, simplified.node_count());
            prop_assert_eq!(report.edges_after, simplified.edge_count());
            prop_assert_eq!(
                report.nodes_before,
                report.nodes_after + report.contracted + report.pruned + report.isolated
            );

            let (again, again_report) = simplify(&simplified, max_nodes);
            prop_assert_eq!(again.coordinates().collect::<Vec<_>>(), simplified.coordinates().collect::<Vec<_>>());
            prop_assert_eq!(get_weights(&again), get_weights(&simplified));
            prop_assert_eq!(again_report.contracted + again_report.pruned + again_report.isolated, 0);
        }
    }
}
