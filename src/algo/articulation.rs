use tracing::debug;

use super::*;

/// Cut vertices and cut edges of undirected graphs via Tarjan's low-link values.
pub trait ArticulationPoints: GraphType<Dir = Undirected> {
    /// Returns all articulation points in ascending order, computed by a recursive DFS.
    ///
    /// A non-root `u` is an articulation point iff some DFS child `v` has `low[v] >= disc[u]`;
    /// a DFS root iff it has at least two children.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
    /// assert_eq!(g.articulation_points(), vec![1]);
    /// ```
    fn articulation_points(&self) -> Vec<Node>;

    /// Same as [`ArticulationPoints::articulation_points`] but with an explicit stack
    fn articulation_points_iterative(&self) -> Vec<Node>;

    /// Returns all bridges as normalized edges in ascending order
    fn bridges(&self) -> Vec<Edge>;
}

impl<G> ArticulationPoints for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn articulation_points(&self) -> Vec<Node> {
        let result = LowLinkSearch::new(self).compute_recursive();
        debug!(n = self.number_of_nodes(), points = ?result.cut_nodes(), "articulation points");
        result.cut_nodes()
    }

    fn articulation_points_iterative(&self) -> Vec<Node> {
        LowLinkSearch::new(self).compute_iterative().cut_nodes()
    }

    fn bridges(&self) -> Vec<Edge> {
        LowLinkSearch::new(self).compute_recursive().bridges()
    }
}

struct LowLinkSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    cut_nodes: NodeBitSet,
    bridges: Vec<Edge>,
}

impl<'a, G> LowLinkSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
            cut_nodes: graph.vertex_bitset_unset(),
            bridges: Vec::new(),
        }
    }

    fn cut_nodes(&self) -> Vec<Node> {
        self.cut_nodes.iter_set_bits().collect()
    }

    fn bridges(mut self) -> Vec<Edge> {
        self.bridges.sort_unstable();
        self.bridges
    }

    fn discover(&mut self, parent: Node, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };
    }

    /// Propagates the low-link of the finished child `v` to its parent `u`
    fn finish_child(&mut self, u: Node, v: Node, u_is_root: bool) {
        let low_v = self.nodes_info[v as usize].low;
        self.nodes_info[u as usize].update_low(low_v);

        let disc_u = self.nodes_info[u as usize].discovery;
        if low_v > disc_u {
            self.bridges.push(Edge(u, v).normalized());
        }
        if !u_is_root && low_v >= disc_u {
            self.cut_nodes.set_bit(u);
        }
    }

    fn compute_recursive(mut self) -> Self {
        for u in self.graph.vertices_range() {
            if self.visited.set_bit(u) {
                continue;
            }

            self.discover(u, u);
            let children = self.compute_node(u, u);
            if children >= 2 {
                self.cut_nodes.set_bit(u);
            }
        }

        self
    }

    /// Returns the number of DFS children of `u`
    fn compute_node(&mut self, root: Node, u: Node) -> NumNodes {
        let mut children = 0;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                children += 1;
                self.discover(u, v);
                self.compute_node(root, v);
                self.finish_child(u, v, u == root);
            } else if v != self.nodes_info[u as usize].parent {
                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }
        }

        children
    }

    fn compute_iterative(mut self) -> Self {
        let graph = self.graph;

        for root in graph.vertices_range() {
            if self.visited.set_bit(root) {
                continue;
            }

            self.discover(root, root);
            let mut root_children: NumNodes = 0;
            let mut stack = vec![(root, graph.neighbors_of(root))];

            loop {
                let (u, next) = match stack.last_mut() {
                    Some((u, nbs)) => (*u, nbs.next()),
                    None => break,
                };

                match next {
                    Some(v) if !self.visited.set_bit(v) => {
                        if u == root {
                            root_children += 1;
                        }
                        self.discover(u, v);
                        stack.push((v, graph.neighbors_of(v)));
                    }
                    Some(v) => {
                        if v != self.nodes_info[u as usize].parent {
                            let v_disc = self.nodes_info[v as usize].discovery;
                            self.nodes_info[u as usize].update_low(v_disc);
                        }
                    }
                    None => {
                        stack.pop();
                        let parent = self.nodes_info[u as usize].parent;
                        if parent != u {
                            self.finish_child(parent, u, parent == root);
                        }
                    }
                }
            }

            if root_children >= 2 {
                self.cut_nodes.set_bit(root);
            }
        }

        self
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
    parent: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
