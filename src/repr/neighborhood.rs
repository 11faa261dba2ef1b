use smallvec::SmallVec;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty neighborhood in a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is in the Neighborhood
    /// ** Might panic if `u >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood as a plain array; keeps insertion order
#[derive(Debug, Clone, Default)]
pub struct ArrNeighborhood(Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Vec::new())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        // `remove` instead of `swap_remove` as traversal orders depend on the stored order
        if let Some(pos) = self.0.iter().position(|&v| v == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Neighborhood stored inline for small degrees; keeps insertion order
#[derive(Debug, Clone, Default)]
pub struct SparseNeighborhood(SmallVec<[Node; 8]>);

impl Neighborhood for SparseNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(SmallVec::new())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some(pos) = self.0.iter().position(|&v| v == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// One row of an adjacency matrix; neighbors are iterated in ascending order
#[derive(Debug, Clone)]
pub struct BitNeighborhood {
    row: NodeBitSet,
    degree: NumNodes,
}

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            row: NodeBitSet::new_unset(n),
            degree: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.degree
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.row.iter_set_bits()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.row.get_bit(v)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        let was_set = self.row.set_bit(u);
        if !was_set {
            self.degree += 1;
        }
        was_set
    }

    fn add_neighbor(&mut self, u: Node) {
        self.try_add_neighbor(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        let was_set = self.row.clear_bit(u);
        if was_set {
            self.degree -= 1;
        }
        was_set
    }

    fn clear(&mut self) {
        self.row.fill(false);
        self.degree = 0;
    }
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$nbs:ident : $generic:ident> => $directed:ident) => {
            impl<$generic: Neighborhood> GraphType for $struct<$generic> {
                type Dir = $directed;
            }

            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<$generic: Neighborhood> AdjacencyTest for $struct<$generic> {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$nbs[u as usize].has_neighbor(v)
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $nbs: vec![$generic::new(n); n as usize],
                    }
                }
            }

            impl<$generic: Neighborhood> std::fmt::Debug for $struct<$generic> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_map()
                        .entries(
                            self.vertices()
                                .map(|u| (u, self.neighbors_of(u).collect::<Vec<_>>())),
                        )
                        .finish()
                }
            }

            impl<$generic: Neighborhood> $struct<$generic> {
                /// Creates a graph from a square 0/1 adjacency matrix.
                /// Entry `matrix[u][v] != 0` adds the edge `(u, v)`; for undirected graphs the
                /// matrix is expected to be symmetric.
                /// ** Panics if a row is shorter than the number of rows **
                pub fn from_matrix(matrix: &[Vec<u8>]) -> Self {
                    let mut graph = Self::new(matrix.len() as NumNodes);
                    for (u, row) in matrix.iter().enumerate() {
                        for v in 0..matrix.len() {
                            if row[v] != 0 {
                                graph.try_add_edge(u as Node, v as Node);
                            }
                        }
                    }
                    graph
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
