use super::*;
use crate::helpers::models::*;
use crate::helpers::{create_test_environment, create_test_environment_with_seed};
use crate::models::DistanceMetric;

fn optimize(graph: &RoadGraph, config: ColonyConfig, seed: u64) -> Result<TourSolution, RouteError> {
    TourOptimizer::new(config, create_test_environment_with_seed(seed)).optimize(graph)
}

#[test]
fn can_build_closed_tour_with_single_ant_and_iteration() {
    let graph = create_graph(&[(0, 1, 3.), (1, 2, 4.), (2, 0, 5.)]);

    let solution = optimize(&graph, ColonyConfig::default().with_ants(1).with_iterations(1), 0).expect("no tour");

    assert_eq!(solution.coordinates.len(), 4);
    assert_eq!(solution.coordinates.first(), solution.coordinates.last());
    assert_eq!(solution.indices.len(), 4);
    assert_eq!(solution.distance, 12.);
    assert_eq!(solution.statistics.iterations, 1);
    assert!(solution.road_path.is_none());

    let mut visited = solution.indices[..3].to_vec();
    visited.sort_unstable();
    assert_eq!(visited, vec![0, 1, 2]);
}

#[test]
fn can_find_optimal_tour_on_square() {
    let graph = create_graph(&[(0, 1, 1.), (1, 2, 1.), (2, 3, 1.), (3, 0, 1.)]);

    let solution = optimize(&graph, ColonyConfig::default().with_ants(5).with_iterations(20), 1).expect("no tour");

    assert_eq!(solution.distance, 4.);
    assert_eq!(solution.coordinates.len(), 5);
}

#[test]
fn can_use_shortest_paths_between_non_adjacent_nodes() {
    let graph = create_path_graph(&[1., 2., 3.]);

    let solution = optimize(&graph, ColonyConfig::default().with_ants(5).with_iterations(20), 2).expect("no tour");

    assert_eq!(solution.distance, 12.);
    assert_eq!(solution.coordinates.len(), 5);
}

#[test]
fn can_fail_on_disconnected_graph() {
    let graph = create_two_triangles_graph();

    let result = optimize(&graph, ColonyConfig::default().with_ants(3).with_iterations(10), 0);

    assert!(matches!(result, Err(RouteError::NoValidTour { .. })));
}

#[test]
fn can_reject_degenerate_graph() {
    let result = optimize(&RoadGraph::new(), ColonyConfig::default(), 0);

    assert_eq!(result.err(), Some(RouteError::DegenerateGraph { nodes: 0 }));
}

#[test]
fn can_reject_invalid_config() {
    let graph = create_path_graph(&[1., 2.]);

    let result = optimize(&graph, ColonyConfig::default().with_ants(0), 0);

    assert!(matches!(result, Err(RouteError::InvalidConfig(_))));
}

#[test]
fn can_start_from_given_index_in_encounter_order() {
    let graph = create_graph(&[(4, 2, 1.), (2, 9, 1.), (9, 4, 1.)]);

    let solution =
        optimize(&graph, ColonyConfig::default().with_ants(2).with_iterations(2).with_start_index(Some(1)), 0)
            .expect("no tour");

    assert_eq!(solution.coordinates.first(), Some(&node(2)));
    assert_eq!(solution.coordinates.last(), Some(&node(2)));
    assert_eq!(solution.statistics.start, StartSelection::Fixed(1));
}

#[test]
fn can_substitute_out_of_range_start() {
    let graph = create_graph(&[(0, 1, 1.), (1, 2, 1.), (2, 0, 1.)]);

    let solution =
        optimize(&graph, ColonyConfig::default().with_ants(2).with_iterations(2).with_start_index(Some(10)), 0)
            .expect("no tour");

    assert!(matches!(solution.statistics.start, StartSelection::Substituted { requested: 10, chosen } if chosen < 3));
}

#[test]
fn can_reproduce_tour_with_same_seed() {
    let graph = create_grid_graph(4, 4);
    let config = ColonyConfig::default().with_ants(4).with_iterations(10);

    let first = optimize(&graph, config.clone(), 11).expect("no tour");
    let second = optimize(&graph, config, 11).expect("no tour");

    assert_eq!(first.indices, second.indices);
    assert_eq!(first.coordinates, second.coordinates);
    assert_eq!(first.distance, second.distance);
}

#[test]
fn can_expand_tour_into_road_path() {
    let graph = create_grid_graph(3, 3);
    let optimizer = TourOptimizer::new(ColonyConfig::default().with_ants(4).with_iterations(5), create_test_environment())
        .with_expand_path(true);

    let solution = optimizer.optimize(&graph).expect("no tour");
    let road_path = solution.road_path.expect("no road path");

    assert_eq!(road_path.first(), solution.coordinates.first());
    assert_eq!(road_path.last(), solution.coordinates.last());
    assert!(road_path.len() >= solution.coordinates.len());
    road_path.windows(2).for_each(|leg| {
        let (Some(from), Some(to)) = (graph.node_id(&leg[0]), graph.node_id(&leg[1])) else {
            unreachable!("road path should consist of graph nodes")
        };
        assert!(graph.min_weight(from, to).is_some(), "{} and {} are not adjacent", leg[0], leg[1]);
    });

    let length = road_path.windows(2).map(|leg| PlanarDistance.distance(&leg[0], &leg[1])).sum::<Float>();
    assert_eq!(length, solution.distance);
}

#[test]
fn can_use_telemetry_observer() {
    let graph = create_path_graph(&[1., 1.]);
    let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let observer: ProgressObserver = {
        let calls = calls.clone();
        Arc::new(move |_: &IterationProgress| {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        })
    };

    TourOptimizer::new(ColonyConfig::default().with_ants(2).with_iterations(3), create_test_environment())
        .with_telemetry(TelemetryMode::OnlyObserver { observer })
        .optimize(&graph)
        .expect("no tour");

    assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 3);
}
