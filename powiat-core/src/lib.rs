//! Core crate contains the building blocks to turn a raw road network into a closed tour which
//! visits every road intersection.
//!
//! The pipeline is:
//!
//! - build a weighted multigraph from coordinate polylines, see [`construction::GraphBuilder`]
//! - bound graph size by contracting pass-through nodes and pruning, see
//!   [`simplification::GraphSimplifier`]
//! - find a short closed tour over all remaining nodes with ant colony optimization driven by
//!   shortest path distances, see [`solver::TourOptimizer`] and [`routing::DistanceOracle`]
//!
//! [`solver::RouteSolver`] chains all the steps together.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod simplification;
pub mod solver;
