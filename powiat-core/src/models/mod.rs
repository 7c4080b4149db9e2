//! Contains models of road network.

mod coordinate;
pub use self::coordinate::Coordinate;

mod graph;
pub use self::graph::*;

mod metric;
pub use self::metric::*;
