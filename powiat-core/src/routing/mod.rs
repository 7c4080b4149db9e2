//! Contains shortest path logic over road network graph.

mod dijkstra;
pub use self::dijkstra::ShortestPathTree;

mod oracle;
pub use self::oracle::*;
