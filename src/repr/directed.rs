/*!
# Directed Graph Representations

A directed graph stores only **outgoing neighborhoods**. In-degrees are derived on demand
by scanning all vertices (see [`AdjacencyList::in_degrees`]).
*/

use crate::{repr::neighborhood::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; N]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

/// Directed graph using a bitset-based adjacency matrix.
pub type AdjMatrix = DirectedGraph<BitNeighborhood>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs> => Directed);

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        let existed = self.out_nbs[u as usize].try_add_neighbor(v);
        if !existed {
            self.num_edges += 1;
        }
        existed
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

test_graph_ops!(test_adj_array, AdjArray, false, (GraphNew, AdjacencyList, GraphEdgeEditing));
test_graph_ops!(test_sparse_adj_array, SparseAdjArray, false, (GraphNew, AdjacencyList, GraphEdgeEditing));
test_graph_ops!(test_adj_matrix, AdjMatrix, false, (GraphNew, AdjacencyList, GraphEdgeEditing));

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn insertion_order_is_kept() {
        let graph = AdjArray::from_edges(4, [(0, 3), (0, 1), (0, 2)]);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![3, 1, 2]);

        let graph = AdjMatrix::from_edges(4, [(0, 3), (0, 1), (0, 2)]);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn arcs_are_one_way() {
        let graph = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.in_degrees(), vec![0, 1, 1]);
        assert!(AdjArray::is_directed());
    }

    #[test]
    fn from_adjacency_lists() {
        let graph = AdjArray::from_adjacency_lists(&[vec![1], vec![2], vec![3], vec![1]]);
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.ordered_edges(false), vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 1)]);
    }

    #[test]
    fn empty_graph() {
        let graph = AdjArray::new(0);
        assert!(graph.is_empty());
        assert_eq!(graph.edges(false).count(), 0);
    }
}
