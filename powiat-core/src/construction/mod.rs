//! Contains logic to build a road network graph from raw polylines.

mod builder;
pub use self::builder::*;
