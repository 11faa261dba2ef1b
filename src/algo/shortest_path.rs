/*!
# Single-Source Shortest Paths

Dijkstra's algorithm on graphs with non-negative edge weights. Unreachable nodes have no
distance, i.e. `None`, instead of a sentinel like infinity.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use num::Zero;
use tracing::{debug, trace};

use super::*;

/// Shortest path distances on weighted graphs
pub trait ShortestPath: WeightedAdjacencyList {
    /// Returns the distance from `source` to every node, using a binary heap with lazy deletion.
    /// If `source` is not a node, every distance is `None`.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 4u32), (0, 2, 1), (2, 1, 2)]);
    /// assert_eq!(g.dijkstra(0), vec![Some(0), Some(3), Some(1)]);
    /// ```
    fn dijkstra(&self, source: Node) -> Vec<Option<Self::Weight>> {
        DijkstraSearch::new(self, source).run().distances
    }

    /// Same distances as [`ShortestPath::dijkstra`], but the next node is found recursively as the
    /// unsettled node with minimum tentative distance instead of with a heap
    fn dijkstra_recursive(&self, source: Node) -> Vec<Option<Self::Weight>> {
        let mut distances = vec![None; self.len()];
        if self.contains_node(source) {
            distances[source as usize] = Some(Self::Weight::zero());
            let mut settled = self.vertex_bitset_unset();
            settle_closest(self, &mut distances, &mut settled);
        }
        distances
    }

    /// Returns the distance and one shortest path from `source` to `target` (both inclusive),
    /// or `None` if `target` is unreachable.
    fn shortest_path(&self, source: Node, target: Node) -> Option<(Self::Weight, Vec<Node>)> {
        if !self.contains_node(target) {
            return None;
        }

        let search = DijkstraSearch::new(self, source).run();
        let distance = search.distances[target as usize]?;

        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = search.predecessors[u as usize];
            path.push(u);
        }
        path.reverse();

        Some((distance, path))
    }
}

impl<G: WeightedAdjacencyList> ShortestPath for G {}

struct DijkstraSearch<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    source: Node,
    distances: Vec<Option<G::Weight>>,
    predecessors: Vec<Node>,
}

impl<'a, G> DijkstraSearch<'a, G>
where
    G: WeightedAdjacencyList,
{
    fn new(graph: &'a G, source: Node) -> Self {
        Self {
            graph,
            source,
            distances: vec![None; graph.len()],
            predecessors: graph.vertices_range().collect(),
        }
    }

    fn run(mut self) -> Self {
        if !self.graph.contains_node(self.source) {
            return self;
        }

        let mut settled = self.graph.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();

        self.distances[self.source as usize] = Some(G::Weight::zero());
        heap.push(Reverse((G::Weight::zero(), self.source)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            if settled.set_bit(u) {
                continue;
            }

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                let candidate = dist + w;
                if self.distances[v as usize].is_none_or(|d| candidate < d) {
                    trace!(u, v, ?candidate, "relax");
                    self.distances[v as usize] = Some(candidate);
                    self.predecessors[v as usize] = u;
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        debug!(
            source = self.source,
            reached = settled.cardinality(),
            "dijkstra finished"
        );
        self
    }
}

fn settle_closest<G: WeightedAdjacencyList>(
    graph: &G,
    distances: &mut [Option<G::Weight>],
    settled: &mut NodeBitSet,
) {
    let closest = graph
        .vertices()
        .filter(|&u| !settled.get_bit(u))
        .filter_map(|u| distances[u as usize].map(|d| (d, u)))
        .min();

    let Some((dist, u)) = closest else {
        return;
    };
    settled.set_bit(u);

    for (v, w) in graph.weighted_neighbors_of(u) {
        let candidate = dist + w;
        if !settled.get_bit(v) && distances[v as usize].is_none_or(|d| candidate < d) {
            distances[v as usize] = Some(candidate);
        }
    }

    settle_closest(graph, distances, settled);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    /// A, B, C, D, E as 0..5
    fn basic_graph() -> WeightedAdjArray<u32> {
        WeightedAdjArray::from_weighted_edges(
            5,
            [(0, 1, 2), (0, 3, 6), (1, 2, 3), (1, 3, 7), (2, 4, 5), (3, 2, 1), (3, 4, 2)],
        )
    }

    #[test]
    fn basic_distances() {
        let graph = basic_graph();
        let expected = vec![Some(0), Some(2), Some(5), Some(6), Some(8)];
        assert_eq!(graph.dijkstra(0), expected);
        assert_eq!(graph.dijkstra_recursive(0), expected);
    }

    #[test]
    fn alternative_paths() {
        let graph = WeightedAdjArray::from_weighted_edges(
            4,
            [(0, 1, 4u32), (0, 2, 2), (1, 3, 5), (2, 1, 1), (2, 3, 8)],
        );
        assert_eq!(graph.dijkstra(0), vec![Some(0), Some(3), Some(2), Some(8)]);
        assert_eq!(graph.shortest_path(0, 3), Some((8, vec![0, 2, 1, 3])));
    }

    #[test]
    fn unreachable_and_degenerate() {
        let graph = WeightedAdjArray::from_weighted_edges(4, [(0, 1, 1u32), (2, 3, 1)]);
        assert_eq!(graph.dijkstra(0), vec![Some(0), Some(1), None, None]);
        assert_eq!(graph.dijkstra_recursive(0), vec![Some(0), Some(1), None, None]);
        assert_eq!(graph.shortest_path(0, 3), None);
        assert_eq!(graph.shortest_path(2, 2), Some((0, vec![2])));

        let single = WeightedAdjArray::<u32>::new(1);
        assert_eq!(single.dijkstra(0), vec![Some(0)]);

        let empty = WeightedAdjArray::<u32>::new(0);
        assert!(empty.dijkstra(0).is_empty());
        assert_eq!(empty.shortest_path(0, 0), None);
    }

    #[test]
    fn complex_graph_with_back_edge() {
        let graph = WeightedAdjArray::from_weighted_edges(
            5,
            [(0, 1, 4u32), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8), (2, 4, 10), (3, 4, 2), (4, 0, 7)],
        );
        let expected = vec![Some(0), Some(4), Some(2), Some(9), Some(11)];
        assert_eq!(graph.dijkstra(0), expected);
        assert_eq!(graph.dijkstra_recursive(0), expected);
        assert_eq!(graph.shortest_path(0, 4), Some((11, vec![0, 1, 3, 4])));
    }

    /// Bellman-style relaxation until nothing changes
    fn relax_until_stable(graph: &WeightedAdjArray<u64>, source: Node) -> Vec<Option<u64>> {
        let mut distances = vec![None; graph.len()];
        distances[source as usize] = Some(0);

        let mut changed = true;
        while changed {
            changed = false;
            for WeightedEdge(u, v, w) in graph.weighted_edges(false) {
                if let Some(du) = distances[u as usize] {
                    if distances[v as usize].is_none_or(|dv| du + w < dv) {
                        distances[v as usize] = Some(du + w);
                        changed = true;
                    }
                }
            }
        }
        distances
    }

    #[test]
    fn dijkstra_agrees_with_relaxation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20, 50] {
            for p in [0.05, 0.1, 0.3] {
                for _ in 0..10 {
                    let graph: WeightedAdjArray<u64> =
                        WeightedGnp::new().nodes(n).prob(p).weights(0..=20).weighted(rng);
                    let expected = relax_until_stable(&graph, 0);

                    assert_eq!(graph.dijkstra(0), expected);
                    assert_eq!(graph.dijkstra_recursive(0), expected);

                    for target in graph.vertices() {
                        match graph.shortest_path(0, target) {
                            None => assert!(expected[target as usize].is_none()),
                            Some((d, path)) => {
                                assert_eq!(Some(d), expected[target as usize]);
                                let length: u64 = path
                                    .windows(2)
                                    .map(|e| graph.weight_of(e[0], e[1]).unwrap_or(u64::MAX))
                                    .sum();
                                assert_eq!(length, d);
                            }
                        }
                    }
                }
            }
        }
    }
}
