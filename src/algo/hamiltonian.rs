/*!
# Hamiltonian Paths and Cycles

Backtracking searches that extend a simple path one node at a time, trying candidates in
ascending order, plus a Held-Karp style bitmask DP that only decides whether a Hamiltonian
path exists.
*/

use tracing::debug;

use super::*;

/// Largest graph accepted by [`Hamiltonian::has_hamiltonian_path_dp`]
pub const MAX_HELD_KARP_NODES: NumNodes = 20;

/// Hamiltonian paths and cycles
pub trait Hamiltonian: AdjacencyList + AdjacencyTest {
    /// Returns a Hamiltonian cycle starting and ending in node `0`, or `None` if there is none.
    /// The graph with a single node has the cycle `[0, 0]`; the empty graph has none.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrixUndir::from_matrix(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
    /// assert_eq!(g.hamiltonian_cycle(), Some(vec![0, 1, 2, 0]));
    /// ```
    fn hamiltonian_cycle(&self) -> Option<Vec<Node>> {
        if self.is_empty() {
            return None;
        }

        let mut path = PathSearch::new(self, 0);
        let found = path.extend(true);
        debug!(n = self.number_of_nodes(), found, "hamiltonian cycle search");

        found.then(|| {
            let mut cycle = path.path;
            cycle.push(0);
            cycle
        })
    }

    /// Returns a Hamiltonian path, or `None` if there is none.
    /// Start nodes are tried in ascending order.
    fn hamiltonian_path(&self) -> Option<Vec<Node>> {
        self.vertices_range().find_map(|start| {
            let mut search = PathSearch::new(self, start);
            search.extend(false).then_some(search.path)
        })
    }

    /// Decides whether a Hamiltonian path exists with a DP over subsets: `ends[mask]` holds the
    /// nodes in which a simple path visiting exactly `mask` can end.
    /// ** Panics if the graph has more than [`MAX_HELD_KARP_NODES`] nodes **
    fn has_hamiltonian_path_dp(&self) -> bool {
        let n = self.number_of_nodes();
        assert!(n <= MAX_HELD_KARP_NODES);
        if n == 0 {
            return false;
        }

        let full: usize = (1 << n) - 1;
        let mut ends = vec![0u32; full + 1];
        for u in 0..n {
            ends[1 << u] = 1 << u;
        }

        for mask in 1..=full {
            let mut remaining = ends[mask];
            while remaining != 0 {
                let u = remaining.trailing_zeros();
                remaining &= remaining - 1;

                for v in self.neighbors_of(u) {
                    if mask & (1 << v) == 0 {
                        ends[mask | (1 << v)] |= 1 << v;
                    }
                }
            }
        }

        ends[full] != 0
    }
}

impl<G: AdjacencyList + AdjacencyTest> Hamiltonian for G {}

struct PathSearch<'a, G> {
    graph: &'a G,
    path: Vec<Node>,
    on_path: NodeBitSet,
}

impl<'a, G> PathSearch<'a, G>
where
    G: AdjacencyList + AdjacencyTest,
{
    fn new(graph: &'a G, start: Node) -> Self {
        let mut on_path = graph.vertex_bitset_unset();
        on_path.set_bit(start);
        Self {
            graph,
            path: vec![start],
            on_path,
        }
    }

    /// Returns *true* if the current path could be extended to all nodes.
    /// If `close` is set, the last node must also be adjacent to the first one.
    fn extend(&mut self, close: bool) -> bool {
        let last = self.path[self.path.len() - 1];

        if self.path.len() == self.graph.len() {
            return !close || self.path.len() == 1 || self.graph.has_edge(last, self.path[0]);
        }

        for v in self.graph.vertices_range() {
            if self.on_path.get_bit(v) || !self.graph.has_edge(last, v) {
                continue;
            }

            self.on_path.set_bit(v);
            self.path.push(v);
            if self.extend(close) {
                return true;
            }
            self.path.pop();
            self.on_path.clear_bit(v);
        }

        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn five_node_graph() -> AdjMatrixUndir {
        AdjMatrixUndir::from_matrix(&[
            vec![0, 1, 0, 1, 0],
            vec![1, 0, 1, 1, 1],
            vec![0, 1, 0, 0, 1],
            vec![1, 1, 0, 0, 1],
            vec![0, 1, 1, 1, 0],
        ])
    }

    fn path_graph() -> AdjMatrixUndir {
        AdjMatrixUndir::from_matrix(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
        ])
    }

    #[test]
    fn cycle_fixtures() {
        assert_eq!(five_node_graph().hamiltonian_cycle(), Some(vec![0, 1, 2, 4, 3, 0]));
        assert_eq!(path_graph().hamiltonian_cycle(), None);
        assert_eq!(AdjMatrixUndir::from_matrix(&[vec![0]]).hamiltonian_cycle(), Some(vec![0, 0]));
        assert_eq!(AdjMatrixUndir::new(0).hamiltonian_cycle(), None);
    }

    #[test]
    fn path_fixtures() {
        assert_eq!(path_graph().hamiltonian_path(), Some(vec![0, 1, 2, 3]));
        assert!(path_graph().has_hamiltonian_path_dp());

        // a star with three leaves has no Hamiltonian path
        let star = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(star.hamiltonian_path(), None);
        assert!(!star.has_hamiltonian_path_dp());

        // directed: the path has to start in 2
        let directed = AdjArray::from_edges(3, [(2, 0), (0, 1)]);
        assert_eq!(directed.hamiltonian_path(), Some(vec![2, 0, 1]));
        assert!(directed.has_hamiltonian_path_dp());

        assert_eq!(AdjArray::new(0).hamiltonian_path(), None);
        assert!(!AdjArray::new(0).has_hamiltonian_path_dp());
        assert_eq!(AdjArray::new(1).hamiltonian_path(), Some(vec![0]));
    }

    fn is_path_of(graph: &AdjArrayUndir, path: &[Node]) -> bool {
        path.iter().copied().sorted().eq(graph.vertices())
            && path.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v))
    }

    #[test]
    fn backtracking_agrees_with_dp() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 4, 6, 8] {
            for p in [0.2, 0.4, 0.6] {
                for _ in 0..15 {
                    let graph: AdjArrayUndir = WeightedGnp::new().nodes(n).prob(p).unweighted(rng);

                    let path = graph.hamiltonian_path();
                    assert_eq!(path.is_some(), graph.has_hamiltonian_path_dp());
                    if let Some(path) = path {
                        assert!(is_path_of(&graph, &path));
                    }

                    if let Some(cycle) = graph.hamiltonian_cycle() {
                        assert_eq!(cycle.first(), cycle.last());
                        assert!(is_path_of(&graph, &cycle[..cycle.len() - 1]));
                        assert!(graph.has_edge(cycle[cycle.len() - 2], 0));
                    }
                }
            }
        }
    }
}
