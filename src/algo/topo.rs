/*!
# Topological Sorting

Two ways to order the nodes of a directed graph such that every edge points forward:
- Kahn's algorithm, see [`TopoSearch`]: repeatedly output a node without remaining in-edges,
- DFS: output nodes in reverse postorder.

A graph with a cycle has no topological order; both variants return `None` then.
*/

use tracing::{debug, warn};

use super::*;

/// Topological orders of directed graphs
pub trait TopologicalSort: Traversal + GraphType<Dir = Directed> {
    /// Returns a topological order using Kahn's algorithm, or `None` if the graph has a cycle
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
    /// assert_eq!(g.topo_sort_kahn(), Some(vec![0, 1, 2, 3]));
    /// ```
    fn topo_sort_kahn(&self) -> Option<Vec<Node>> {
        let order: Vec<Node> = self.topo_search().collect();
        if order.len() == self.len() {
            debug!(n = self.number_of_nodes(), "kahn order found");
            Some(order)
        } else {
            warn!(
                n = self.number_of_nodes(),
                ordered = order.len(),
                "graph has a cycle, no topological order"
            );
            None
        }
    }

    /// Returns a topological order as reverse DFS postorder, or `None` if the graph has a cycle.
    /// Roots are tried in ascending order.
    fn topo_sort_dfs(&self) -> Option<Vec<Node>> {
        let mut state = vec![VisitState::New; self.len()];
        let mut postorder = Vec::with_capacity(self.len());

        for u in self.vertices_range() {
            if state[u as usize] == VisitState::New && !postorder_visit(self, u, &mut state, &mut postorder) {
                warn!(n = self.number_of_nodes(), node = u, "graph has a cycle, no topological order");
                return None;
            }
        }

        postorder.reverse();
        Some(postorder)
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList + GraphType<Dir = Directed> {}

/// Topologically sorts the directed graph on `n` nodes with the given edges using Kahn's algorithm.
/// Returns `None` if the edges form a cycle.
/// ** Panics if an edge mentions a node `>= n` **
pub fn topological_sort(n: NumNodes, edges: &[(Node, Node)]) -> Option<Vec<Node>> {
    let mut graph = AdjArray::new(n);
    for &(u, v) in edges {
        graph.try_add_edge(u, v);
    }
    graph.topo_sort_kahn()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    New,
    Active,
    Done,
}

/// Returns *false* if a cycle was found
fn postorder_visit<G: AdjacencyList>(
    graph: &G,
    u: Node,
    state: &mut [VisitState],
    postorder: &mut Vec<Node>,
) -> bool {
    state[u as usize] = VisitState::Active;

    for v in graph.neighbors_of(u) {
        match state[v as usize] {
            VisitState::Active => return false,
            VisitState::New => {
                if !postorder_visit(graph, v, state, postorder) {
                    return false;
                }
            }
            VisitState::Done => {}
        }
    }

    state[u as usize] = VisitState::Done;
    postorder.push(u);
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use crate::testing::captured_logs;
    use rstest::rstest;

    fn is_topological(n: NumNodes, edges: &[(Node, Node)], order: &[Node]) -> bool {
        if order.len() != n as usize {
            return false;
        }

        let mut position = vec![usize::MAX; n as usize];
        for (i, &u) in order.iter().enumerate() {
            position[u as usize] = i;
        }
        edges.iter().all(|&(u, v)| position[u as usize] < position[v as usize])
    }

    #[rstest]
    #[case(4, vec![(0, 1), (0, 2), (1, 3), (2, 3)])]
    #[case(6, vec![(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)])]
    #[case(5, vec![])]
    #[case(1, vec![])]
    #[case(0, vec![])]
    fn valid_orders(#[case] n: NumNodes, #[case] edges: Vec<(Node, Node)>) {
        let order = topological_sort(n, &edges).unwrap();
        assert!(is_topological(n, &edges, &order));

        let graph = AdjArray::from_edges(n, edges.iter());
        let order = graph.topo_sort_dfs().unwrap();
        assert!(is_topological(n, &edges, &order));
    }

    #[test]
    fn single_node() {
        assert_eq!(topological_sort(1, &[]), Some(vec![0]));
    }

    #[test]
    fn cycle_has_no_order() {
        let edges = [(0, 1), (1, 2), (2, 0)];
        let logs = captured_logs(|| assert_eq!(topological_sort(3, &edges), None));
        assert!(logs.contains("no topological order"));

        let graph = AdjArray::from_edges(4, [(3, 0), (0, 1), (1, 2), (2, 1)]);
        assert_eq!(graph.topo_sort_dfs(), None);
    }

    #[test]
    fn kahn_and_dfs_agree_on_existence() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 15, 40] {
            for p in [0.02, 0.05, 0.1] {
                for _ in 0..20 {
                    let graph: AdjArray = WeightedGnp::new().nodes(n).prob(p).unweighted(rng);
                    let edges: Vec<(Node, Node)> = graph.edges(false).map(|Edge(u, v)| (u, v)).collect();

                    let kahn = graph.topo_sort_kahn();
                    let dfs = graph.topo_sort_dfs();
                    assert_eq!(kahn.is_some(), dfs.is_some());

                    if let (Some(kahn), Some(dfs)) = (kahn, dfs) {
                        assert!(is_topological(n, &edges, &kahn));
                        assert!(is_topological(n, &edges, &dfs));
                    }
                }
            }
        }
    }
}
