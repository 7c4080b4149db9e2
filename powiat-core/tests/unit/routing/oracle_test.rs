use super::*;
use crate::helpers::models::*;

#[test]
fn can_calculate_shortest_distances_on_path() {
    let graph = create_path_graph(&[1., 2., 3.]);
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.size(), 4);
    assert_eq!(oracle.distance(0, 3), 6.);
    assert_eq!(oracle.distance(3, 0), 6.);
    assert_eq!(oracle.distance(1, 2), 2.);
    assert_eq!(oracle.distance(2, 2), 0.);
}

#[test]
fn can_use_cheapest_parallel_edge_and_shortcut() {
    let graph = create_graph(&[(0, 1, 10.), (0, 1, 4.), (1, 2, 4.), (0, 2, 9.)]);
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.distance(0, 1), 4.);
    assert_eq!(oracle.distance(0, 2), 8.);
    assert_eq!(oracle.path(0, 2), Some(vec![0, 1, 2]));
    assert_eq!(oracle.path(2, 0), Some(vec![2, 1, 0]));
}

#[test]
fn can_return_infinity_for_unreachable_pairs() {
    let graph = create_two_triangles_graph();
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.distance(0, 4), Float::INFINITY);
    assert_eq!(oracle.distance(5, 1), Float::INFINITY);
    assert_eq!(oracle.distance(3, 5), 1.);
    assert_eq!(oracle.path(0, 4), None);
}

#[test]
fn can_return_infinity_for_unknown_indices() {
    let graph = create_path_graph(&[1.]);
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.distance(0, 7), Float::INFINITY);
    assert_eq!(oracle.distance(7, 7), Float::INFINITY);
    assert_eq!(oracle.path(7, 7), None);
    assert_eq!(oracle.coordinate(7), None);
}

#[test]
fn can_cache_rows_by_smaller_index() {
    let graph = create_path_graph(&[1., 2., 3.]);
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.cached_rows(), 0);

    oracle.distance(3, 1);
    oracle.distance(1, 3);
    oracle.distance(1, 2);
    assert_eq!(oracle.cached_rows(), 1);

    oracle.distance(0, 0);
    assert_eq!(oracle.cached_rows(), 1);

    oracle.distance(2, 0);
    assert_eq!(oracle.cached_rows(), 2);
}

#[test]
fn can_map_dense_indices_in_encounter_order() {
    let mut graph = create_graph(&[(5, 2, 1.), (2, 7, 1.), (7, 9, 1.)]);
    graph.remove_node(1);
    let oracle = DistanceOracle::new(&graph);

    assert_eq!(oracle.size(), 3);
    assert_eq!(oracle.coordinate(0), Some(node(5)));
    assert_eq!(oracle.coordinate(1), Some(node(7)));
    assert_eq!(oracle.coordinate(2), Some(node(9)));
    assert_eq!(oracle.index().node_id(1), Some(2));
    assert_eq!(oracle.index().dense(2), Some(1));
    assert_eq!(oracle.index().dense(1), None);
    assert_eq!(oracle.distance(0, 1), Float::INFINITY);
    assert_eq!(oracle.distance(1, 2), 1.);
}

#[test]
fn can_use_oracle_as_transition_cost() {
    let graph = create_grid_graph(2, 3);
    let oracle = DistanceOracle::new(&graph);
    let cost: &dyn TransitionCost = &oracle;

    assert_eq!(cost.size(), 6);
    assert_eq!(cost.cost(0, 5), 3.);
}

#[test]
fn can_answer_from_many_threads() {
    let graph = create_grid_graph(4, 4);
    let oracle = DistanceOracle::new(&graph);

    let distances = std::thread::scope(|scope| {
        let handles = (0..4).map(|_| scope.spawn(|| oracle.distance(0, 15))).collect::<Vec<_>>();
        handles.into_iter().map(|handle| handle.join().expect("thread failed")).collect::<Vec<_>>()
    });

    assert_eq!(distances, vec![6.; 4]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn graph_strategy() -> impl Strategy<Value = RoadGraph> {
        prop::collection::vec((0..10_usize, 0..10_usize, 0.0..50.0f64), 1..25)
            .prop_map(|edges| create_graph(edges.as_slice()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn can_answer_symmetric_distances(graph in graph_strategy()) {
            let oracle = DistanceOracle::new(&graph);
            let size = oracle.size();

            for a in 0..size {
                prop_assert_eq!(oracle.distance(a, a), 0.);

                for b in 0..size {
                    let forward = oracle.distance(a, b);
                    prop_assert!(forward >= 0.);
                    prop_assert_eq!(forward, oracle.distance(b, a));
                }
            }
        }

        #[test]
        fn can_return_paths_matching_distances(graph in graph_strategy()) {
            let oracle = DistanceOracle::new(&graph);
            let size = oracle.size();

            for a in 0..size {
                for b in 0..size {
                    match oracle.path(a, b) {
                        Some(path) => {
                            prop_assert_eq!(path.first(), Some(&a));
                            prop_assert_eq!(path.last(), Some(&b));
                            let length = path.windows(2).map(|leg| oracle.distance(leg[0], leg[1])).sum::<Float>();
                            prop_assert!((length - oracle.distance(a, b)).abs() < 1E-6);
                        }
                        None => prop_assert_eq!(oracle.distance(a, b), Float::INFINITY),
                    }
                }
            }
        }
    }
}
