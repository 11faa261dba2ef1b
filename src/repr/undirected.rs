use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrixUndir = UndirectedGraph<BitNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<nbs : Nbs> => Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

test_graph_ops!(test_adj_array_undir, AdjArrayUndir, true, (GraphNew, AdjacencyList, GraphEdgeEditing));
test_graph_ops!(test_sparse_adj_array_undir, SparseAdjArrayUndir, true, (GraphNew, AdjacencyList, GraphEdgeEditing));
test_graph_ops!(test_adj_matrix_undir, AdjMatrixUndir, true, (GraphNew, AdjacencyList, GraphEdgeEditing));

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        assert!(graph.has_edge(1, 0));
        assert!(graph.try_add_edge(1, 0));
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.ordered_edges(true), vec![Edge(0, 1), Edge(1, 2)]);

        graph.remove_edge(2, 1);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0]);
        assert!(AdjArrayUndir::is_undirected());
    }

    #[test]
    fn from_symmetric_adjacency_lists() {
        let graph = AdjArrayUndir::from_adjacency_lists(&[vec![1, 2], vec![0, 2, 3], vec![0, 1], vec![1]]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2, 3]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn from_matrix() {
        let graph = AdjMatrixUndir::from_matrix(&[
            vec![0, 1, 0, 1, 0],
            vec![1, 0, 1, 0, 0],
            vec![0, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 1],
            vec![0, 0, 0, 1, 0],
        ]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 3]);
        assert_eq!(graph.degree_of(4), 1);
    }
}
