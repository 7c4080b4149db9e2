use super::*;

parameterized_test! {can_detect_termination, (num_iterations, improvements, iteration, expected), {
    let mut early_stopping = EarlyStopping::new(num_iterations);

    (0..=iteration).for_each(|current| early_stopping.track(current, improvements.contains(&current)));

    assert_eq!(early_stopping.is_termination(iteration), expected);
}}

can_detect_termination! {
    case_01_warmup_not_passed: (100, vec![0], 50, false),
    case_02_stagnated: (100, vec![0], 51, true),
    case_03_recent_improvement: (100, vec![0, 40], 60, false),
    case_04_patience_exhausted: (100, vec![0, 40], 61, true),
    case_05_before_warmup: (100, vec![0, 10], 45, false),
    case_06_single_iteration: (1, vec![0], 0, false),
    case_07_small_budget: (5, vec![0], 3, true),
    case_08_improving: (10, vec![0, 1, 2, 3, 4, 5, 6, 7, 8], 8, false),
}

#[test]
fn can_track_last_improvement() {
    let mut early_stopping = EarlyStopping::new(10);

    early_stopping.track(3, true);
    early_stopping.track(4, false);

    assert_eq!(early_stopping.last_improvement(), 3);
}
