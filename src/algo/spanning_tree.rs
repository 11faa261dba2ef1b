/*!
# Minimum Spanning Trees

Prim's algorithm grows a tree from a start node with a lazy min-heap of crossing edges.
Kruskal's algorithm scans all edges by weight and joins components with a [`UnionFind`].
Both return the total weight together with the chosen edges in the order they were added.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use num::Zero;
use tracing::{debug, trace};

use super::*;

/// Total weight and edges of a spanning tree
pub type SpanningTreeEdges<W> = (W, Vec<WeightedEdge<W>>);

/// Minimum spanning trees of undirected weighted graphs
pub trait SpanningTree: WeightedAdjacencyList + GraphType<Dir = Undirected> {
    /// Computes a minimum spanning tree of the component containing `start`.
    /// Every returned edge is `(tree node, new node, weight)`.
    /// If `start` is not a node, the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArrayUndir::from_weighted_edges(3, [(0, 1, 5u32), (1, 2, 1), (0, 2, 2)]);
    /// let (weight, edges) = g.prim(0);
    /// assert_eq!(weight, 3);
    /// assert_eq!(edges, vec![WeightedEdge(0, 2, 2), WeightedEdge(2, 1, 1)]);
    /// ```
    fn prim(&self, start: Node) -> SpanningTreeEdges<Self::Weight> {
        let mut total = Self::Weight::zero();
        let mut tree = Vec::new();
        if !self.contains_node(start) {
            return (total, tree);
        }

        let mut in_tree = self.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();
        in_tree.set_bit(start);
        push_crossing_edges(self, start, &in_tree, &mut heap);

        while let Some(Reverse((w, v, u))) = heap.pop() {
            if in_tree.set_bit(v) {
                continue;
            }

            trace!(u, v, ?w, "add tree edge");
            total = total + w;
            tree.push(WeightedEdge(u, v, w));
            push_crossing_edges(self, v, &in_tree, &mut heap);
        }

        debug!(start, edges = tree.len(), ?total, "prim finished");
        (total, tree)
    }

    /// Same tree as [`SpanningTree::prim`], but every step recursively picks the cheapest
    /// edge leaving the current tree by scanning all tree nodes
    fn prim_recursive(&self, start: Node) -> SpanningTreeEdges<Self::Weight> {
        let mut tree = Vec::new();
        if self.contains_node(start) {
            let mut in_tree = self.vertex_bitset_unset();
            in_tree.set_bit(start);
            grow_tree(self, &mut in_tree, &mut tree);
        }

        let total = tree
            .iter()
            .fold(Self::Weight::zero(), |acc, e| acc + *e.weight());
        (total, tree)
    }
}

impl<G> SpanningTree for G where G: WeightedAdjacencyList + GraphType<Dir = Undirected> {}

fn push_crossing_edges<G: WeightedAdjacencyList>(
    graph: &G,
    u: Node,
    in_tree: &NodeBitSet,
    heap: &mut BinaryHeap<Reverse<(G::Weight, Node, Node)>>,
) {
    for (v, w) in graph.weighted_neighbors_of(u) {
        if !in_tree.get_bit(v) {
            heap.push(Reverse((w, v, u)));
        }
    }
}

fn grow_tree<G: WeightedAdjacencyList>(
    graph: &G,
    in_tree: &mut NodeBitSet,
    tree: &mut Vec<WeightedEdge<G::Weight>>,
) {
    let current: &NodeBitSet = in_tree;
    let cheapest = current
        .iter_set_bits()
        .flat_map(move |u| {
            graph
                .weighted_neighbors_of(u)
                .filter(move |&(v, _)| !current.get_bit(v))
                .map(move |(v, w)| (w, v, u))
        })
        .min();

    if let Some((w, v, u)) = cheapest {
        in_tree.set_bit(v);
        tree.push(WeightedEdge(u, v, w));
        grow_tree(graph, in_tree, tree);
    }
}

/// Computes a minimum spanning forest of the undirected graph on `n` nodes given by `edges`.
/// Edges are sorted stably by weight, so among equal weights the input order decides.
///
/// # Examples
/// ```
/// use algo_classics::{prelude::*, algo::*};
///
/// let edges = [(0, 1, 10u32), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)].map(|(u, v, w)| WeightedEdge(u, v, w));
/// let (weight, tree) = kruskal(4, &edges);
/// assert_eq!(weight, 19);
/// assert_eq!(tree, vec![WeightedEdge(2, 3, 4), WeightedEdge(0, 3, 5), WeightedEdge(0, 1, 10)]);
/// ```
pub fn kruskal<W: Weight>(n: NumNodes, edges: &[WeightedEdge<W>]) -> SpanningTreeEdges<W> {
    let mut sets = UnionFind::new(n);
    let mut total = W::zero();

    let tree = edges
        .iter()
        .sorted_by_key(|e| e.2)
        .filter(|e| sets.union(e.0, e.1))
        .copied()
        .collect_vec();

    for e in &tree {
        total = total + e.2;
    }

    debug!(n, m = edges.len(), edges = tree.len(), ?total, "kruskal finished");
    (total, tree)
}
