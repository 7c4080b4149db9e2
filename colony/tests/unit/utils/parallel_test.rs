use super::*;

parameterized_test! {can_map_collect_preserving_order, is_parallel, {
    let source = (0..1000).collect::<Vec<usize>>();

    let result = map_collect(source, is_parallel, |value| value * 2);

    assert_eq!(result, (0..1000).map(|value| value * 2).collect::<Vec<_>>());
}}

can_map_collect_preserving_order! {
    case_01_parallel: true,
    case_02_sequential: false,
}
