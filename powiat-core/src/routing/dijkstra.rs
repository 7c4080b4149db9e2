use super::NodeIndex;
use crate::models::RoadGraph;
use colony::prelude::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Keeps shortest path distances and predecessors from a single source over dense indices.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Float>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Runs Dijkstra's algorithm from given dense source index.
    pub(crate) fn new(graph: &RoadGraph, index: &NodeIndex, source: usize) -> Self {
        let size = index.size();
        let mut distances = vec![Float::INFINITY; size];
        let mut predecessors = vec![None; size];
        let mut heap = BinaryHeap::new();

        if source < size {
            distances[source] = 0.;
            heap.push(QueueItem { distance: 0., node: source });
        }

        while let Some(QueueItem { distance, node }) = heap.pop() {
            if distance > distances[node] {
                continue;
            }

            let Some(node_id) = index.node_id(node) else { continue };

            graph.incident_edges(node_id).for_each(|edge| {
                let Some(next) = index.dense(edge.opposite(node_id)) else { return };
                let candidate = distance + edge.weight;

                if candidate < distances[next] {
                    distances[next] = candidate;
                    predecessors[next] = Some(node);
                    heap.push(QueueItem { distance: candidate, node: next });
                }
            });
        }

        Self { source, distances, predecessors }
    }

    /// Returns distance to the target, infinity if it is not reachable.
    pub fn distance(&self, target: usize) -> Float {
        self.distances.get(target).copied().unwrap_or(Float::INFINITY)
    }

    /// Returns dense indices of the path from the source to the target, both included.
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target).is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            current = self.predecessors.get(current).copied().flatten()?;
            path.push(current);
        }

        path.reverse();

        Some(path)
    }
}

struct QueueItem {
    distance: Float,
    node: usize,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    // NOTE reversed to turn max heap into min heap
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(other.distance, self.distance).then_with(|| other.node.cmp(&self.node))
    }
}
