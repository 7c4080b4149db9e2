//! This crate exposes an ant colony optimization engine and some helper functionality which can be
//! used to build a tour construction heuristic for routing problems.
//!
//! The engine knows nothing about a concrete problem: it works with dense node indices and asks
//! a [`aco::TransitionCost`] implementation for the cost of moving between two of them.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod aco;
pub mod prelude;
pub mod utils;
