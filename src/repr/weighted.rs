/*!
# Weighted Graph Representations

[`WeightedAdjArrayImpl`] stores a `Vec<(Node, W)>` per node in insertion order.
The orientation is a type parameter: [`WeightedAdjArray`] is directed,
[`WeightedAdjArrayUndir`] mirrors every edge.
*/

use std::marker::PhantomData;

use super::*;

/// Adjacency array with one weight per edge.
#[derive(Clone)]
pub struct WeightedAdjArrayImpl<W, D> {
    nbs: Vec<Vec<(Node, W)>>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed weighted graph
pub type WeightedAdjArray<W> = WeightedAdjArrayImpl<W, Directed>;

/// Undirected weighted graph
pub type WeightedAdjArrayUndir<W> = WeightedAdjArrayImpl<W, Undirected>;

impl<W, D> WeightedAdjArrayImpl<W, D>
where
    W: Weight,
    D: GraphDir,
{
    /// Creates an empty graph with n singleton nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
            _dir: PhantomData,
        }
    }

    /// Adds the edge `(u, v)` with weight `w`. Parallel edges are allowed.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_weighted_edge(&mut self, u: Node, v: Node, w: W) {
        self.nbs[u as usize].push((v, w));
        if !D::DIRECTED && u != v {
            self.nbs[v as usize].push((u, w));
        }
        self.num_edges += 1;
    }

    /// Create a graph from a number of nodes and weighted edges
    pub fn from_weighted_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<WeightedEdge<W>>,
    {
        let mut graph = Self::new(n);
        for WeightedEdge(u, v, w) in edges.into_iter().map(Into::into) {
            graph.add_weighted_edge(u, v, w);
        }
        graph
    }

    /// Returns the weight of the first stored edge `(u, v)`, if any
    /// ** Panics if `u >= n` **
    pub fn weight_of(&self, u: Node, v: Node) -> Option<W> {
        self.nbs[u as usize]
            .iter()
            .find_map(|&(x, w)| (x == v).then_some(w))
    }
}

impl<W, D: GraphDir> GraphType for WeightedAdjArrayImpl<W, D> {
    type Dir = D;
}

impl<W, D> GraphNodeOrder for WeightedAdjArrayImpl<W, D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<W, D> GraphEdgeOrder for WeightedAdjArrayImpl<W, D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W, D> AdjacencyList for WeightedAdjArrayImpl<W, D> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W, D> AdjacencyTest for WeightedAdjArrayImpl<W, D> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<W: Weight, D> WeightedAdjacencyList for WeightedAdjArrayImpl<W, D> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl<W: std::fmt::Debug, D> std::fmt::Debug for WeightedAdjArrayImpl<W, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.nbs.iter().enumerate())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn directed_weighted_edges() {
        let graph = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 4u32), (0, 2, 1), (2, 1, 2)]);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weighted_neighbors_of(0).collect_vec(), vec![(1, 4), (2, 1)]);
        assert_eq!(graph.weight_of(2, 1), Some(2));
        assert_eq!(graph.weight_of(1, 2), None);
        assert!(WeightedAdjArray::<u32>::is_directed());
    }

    #[test]
    fn undirected_weighted_edges_are_mirrored() {
        let graph = WeightedAdjArrayUndir::from_weighted_edges(3, [(0, 1, 4u64), (1, 2, 7)]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.weighted_neighbors_of(1).collect_vec(), vec![(0, 4), (2, 7)]);
        assert_eq!(
            graph.weighted_edges(true).collect_vec(),
            vec![WeightedEdge(0, 1, 4), WeightedEdge(1, 2, 7)]
        );
        assert!(graph.has_edge(2, 1));
    }
}
