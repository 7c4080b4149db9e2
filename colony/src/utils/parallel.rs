#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel.
/// The order of results matches the order of the source.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().map(map_op).collect()
}

/// Maps collection either in parallel or sequentially, depending on `is_parallel` flag.
pub fn map_collect<T, F, R>(source: Vec<T>, is_parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    if is_parallel { parallel_into_collect(source, map_op) } else { source.into_iter().map(map_op).collect() }
}
