#[cfg(test)]
#[path = "../../tests/unit/aco/tour_test.rs"]
mod tour_test;

use crate::utils::Float;

/// A closed tour: a sequence of node indices which starts and ends at the same node.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Node indices in visiting order, the first one is repeated at the end.
    pub nodes: Vec<usize>,
    /// Total distance of the tour.
    pub distance: Float,
}

impl Tour {
    /// Returns true if the tour visits every node in `[0, size)` exactly once and returns to
    /// its first node.
    pub fn is_complete(&self, size: usize) -> bool {
        let (first, last) = match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return false,
        };

        if first != last || self.nodes.len() != size + 1 {
            return false;
        }

        let mut visited = vec![false; size];

        self.nodes[..size].iter().all(|&node| node < size && !std::mem::replace(&mut visited[node], true))
    }

    /// Returns true if the tour has a finite distance.
    pub fn is_feasible(&self) -> bool {
        self.distance.is_finite()
    }

    /// Appends the first node to the end if the tour is not closed yet.
    pub fn close(&mut self) {
        if let (Some(&first), Some(&last)) = (self.nodes.first(), self.nodes.last()) {
            if first != last {
                self.nodes.push(first);
            }
        }
    }

    /// Returns an iterator over tour legs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|leg| (leg[0], leg[1]))
    }
}
