use tracing::debug;

use super::*;

/// Cycle detection for directed and undirected graphs
pub trait CycleDetection: AdjacencyList + Traversal {
    /// Returns *true* if the directed graph contains a cycle (self-loops included).
    /// Uses a recursive three-colour DFS where an edge into a node on the current
    /// recursion stack closes a cycle.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]);
    /// assert!(g.has_cycle());
    /// ```
    fn has_cycle(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        let mut colors = vec![Color::White; self.len()];
        let found = self
            .vertices()
            .any(|u| colors[u as usize] == Color::White && visit_colored(self, u, &mut colors));

        debug!(n = self.number_of_nodes(), found, "three-colour cycle search");
        found
    }

    /// Same as [`CycleDetection::has_cycle`] but iterative: a directed graph is cyclic iff
    /// Kahn's algorithm cannot output every node.
    fn has_cycle_kahn(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        !self.is_acyclic()
    }

    /// Returns *true* if the undirected graph contains a cycle (self-loops included).
    /// Every edge is fed into a union-find; an edge within one set closes a cycle.
    fn has_undirected_cycle(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        let mut sets = UnionFind::new(self.number_of_nodes());
        let found = self.edges(true).any(|Edge(u, v)| !sets.union(u, v));

        debug!(n = self.number_of_nodes(), found, "union-find cycle search");
        found
    }
}

impl<G: AdjacencyList> CycleDetection for G {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

fn visit_colored<G: AdjacencyList>(graph: &G, u: Node, colors: &mut [Color]) -> bool {
    colors[u as usize] = Color::Gray;

    for v in graph.neighbors_of(u) {
        match colors[v as usize] {
            Color::Gray => return true,
            Color::White => {
                if visit_colored(graph, v, colors) {
                    return true;
                }
            }
            Color::Black => {}
        }
    }

    colors[u as usize] = Color::Black;
    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    #[rstest]
    #[case(4, vec![(0, 1), (1, 2), (2, 3), (3, 1)], true)]
    #[case(4, vec![(0, 1), (1, 2), (2, 3)], false)]
    #[case(0, vec![], false)]
    #[case(1, vec![(0, 0)], true)]
    #[case(6, vec![(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (2, 5), (5, 4)], false)]
    #[case(3, vec![(0, 1), (1, 2), (2, 0)], true)]
    fn directed_cycles(#[case] n: NumNodes, #[case] edges: Vec<(Node, Node)>, #[case] cyclic: bool) {
        let graph = AdjArray::from_edges(n, edges);
        assert_eq!(graph.has_cycle(), cyclic);
        assert_eq!(graph.has_cycle_kahn(), cyclic);
    }

    #[rstest]
    #[case(4, vec![(0, 1), (1, 2), (2, 3)], false)]
    #[case(3, vec![(0, 1), (1, 2), (2, 0)], true)]
    #[case(5, vec![(0, 1), (2, 3), (3, 4)], false)]
    #[case(2, vec![(1, 1)], true)]
    #[case(0, vec![], false)]
    fn undirected_cycles(#[case] n: NumNodes, #[case] edges: Vec<(Node, Node)>, #[case] cyclic: bool) {
        let graph = AdjArrayUndir::from_edges(n, edges);
        assert_eq!(graph.has_undirected_cycle(), cyclic);
    }

    #[test]
    fn colours_agree_with_kahn() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2, 5, 10, 30] {
            for p in [0.02, 0.05, 0.1, 0.3] {
                for _ in 0..20 {
                    let graph: AdjArray = WeightedGnp::new().nodes(n).prob(p).unweighted(rng);
                    assert_eq!(graph.has_cycle(), graph.has_cycle_kahn());
                }
            }
        }
    }

    #[test]
    fn trees_are_acyclic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [1, 10, 100] {
            let tree = AdjArrayUndir::from_edges(n, Mst::new().nodes(n).generate(rng));
            assert!(!tree.has_undirected_cycle());
        }
    }
}
