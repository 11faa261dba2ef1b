use std::{
    fmt::{Debug, Display},
    ops::Add,
};

use num::Zero;

use crate::node::*;

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from((u, v): (Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(&(u, v): &(Node, Node)) -> Self {
        Edge(u, v)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Simple bidirection from `0..n^2` to all possible (directed) edges of `n` nodes
    pub fn from_u64(x: u64, n: u64) -> Self {
        debug_assert!(x < n * n);

        let u = x / n;
        let v = x % n;
        Edge(u as Node, v as Node)
    }
}

/// Edge weights: any totally ordered numeric type with an additive identity.
///
/// Floating point weights are not supported, as shortest-path and spanning-tree
/// algorithms rely on a total order.
pub trait Weight: Copy + Ord + Zero + Add<Output = Self> + Debug {}

impl<W> Weight for W where W: Copy + Ord + Zero + Add<Output = W> + Debug {}

/// An edge `(u, v)` carrying a weight `w`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WeightedEdge<W>(pub Node, pub Node, pub W);

impl<W> WeightedEdge<W> {
    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> &W {
        &self.2
    }
}

impl<W: Copy> WeightedEdge<W> {
    /// Normalizes the endpoints such that the smaller one comes first and keeps the weight
    pub fn normalized(&self) -> Self {
        WeightedEdge(self.0.min(self.1), self.0.max(self.1), self.2)
    }
}

impl<W> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from((u, v, w): (Node, Node, W)) -> Self {
        WeightedEdge(u, v, w)
    }
}

impl<W: Copy> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(&(u, v, w): &(Node, Node, W)) -> Self {
        WeightedEdge(u, v, w)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(5, 2);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(2, 5));
        assert_eq!(e.reverse(), Edge(2, 5));
        assert!(Edge(3, 3).is_loop());
        assert_eq!(format!("{e:?}"), "(5,2)");
    }

    #[test]
    fn from_u64_covers_all_pairs() {
        let n = 4u64;
        let mut edges: Vec<Edge> = (0..n * n).map(|x| Edge::from_u64(x, n)).collect();
        edges.dedup();
        assert_eq!(edges.len(), 16);
        assert_eq!(edges[5], Edge(1, 1));
    }

    #[test]
    fn weighted_edge_normalization_keeps_weight() {
        let e = WeightedEdge(4, 1, 7u32);
        assert_eq!(e.normalized(), WeightedEdge(1, 4, 7));
        assert_eq!(e.edge(), Edge(4, 1));
        assert_eq!(*e.weight(), 7);
    }
}
