/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- A true preorder DFS iterator ([`DfsPreorder`]) next to recursive BFS/DFS variants that
  produce the same orders.
- [`TraversalTree`], which turns a traversal with predecessors into a parent array.
- Kahn's topological ordering for directed graphs ([`TopoSearch`]).
- A high-level [`Traversal`] trait that exposes all of the above directly on graphs.

Neighbors are always taken in the order the representation stores them. For adjacency arrays
that is insertion order, for adjacency matrices ascending order.
*/

use super::*;
use smallvec::SmallVec;
use std::{collections::VecDeque, marker::PhantomData};

/// Gives access to the graph an algorithm or iterator operates on
pub trait WithGraphRef<G> {
    /// Returns the graph being processed.
    fn graph_ref(&self) -> &G;
}

/// Common interface for querying visited-states during a traversal.
pub trait TraversalState<S>
where
    S: Set<Node>,
{
    /// Returns a reference to the set of visited nodes.
    fn visited(&self) -> &S;

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.visited().contains(&u)
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`] stores only the node,
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; the absence of a predecessor is encoded by equal entries.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a traversal.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Nodes are marked as visited when they are pushed into the frontier. With a stack this
/// yields a valid DFS tree but not the textbook preorder; use [`DfsPreorder`] for that.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// Breadth-first search with a custom visited-set.
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// A BFS traversal iterator visiting nodes level by level.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A stack-based traversal iterator.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A stack-based traversal iterator that records predecessor information.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> TraversalState<V> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn visited(&self) -> &V {
        &self.visited
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.sequencer.cardinality();
        (
            pending,
            Some(pending + self.graph.len().saturating_sub(self.visited.len())),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// If `start` is not a node of the graph, the iterator is empty.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        let mut sequencer = S::default();

        if graph.contains_node(start) {
            visited.insert(start);
            sequencer.push(I::new_without_predecessor(start));
        }

        Self {
            graph,
            visited,
            sequencer,
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

/// Iterative depth-first search yielding nodes in **preorder**.
///
/// Nodes are marked when popped. Unvisited neighbors are pushed in reverse so that the first
/// stored neighbor is explored first, which reproduces the recursive order exactly.
pub struct DfsPreorder<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G: AdjacencyList> DfsPreorder<'a, G> {
    /// Creates a preorder iterator starting in `start`; empty if `start` is not a node.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut stack = Vec::new();
        if graph.contains_node(start) {
            stack.push(start);
        }

        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack,
        }
    }
}

impl<G: AdjacencyList> TraversalState<NodeBitSet> for DfsPreorder<'_, G> {
    fn visited(&self) -> &NodeBitSet {
        &self.visited
    }
}

impl<G: AdjacencyList> Iterator for DfsPreorder<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited.set_bit(u) {
                continue;
            }

            let unvisited: SmallVec<[Node; 8]> = self
                .graph
                .neighbors_of(u)
                .filter(|&v| !self.visited.get_bit(v))
                .collect();
            self.stack.extend(unvisited.into_iter().rev());

            return Some(u);
        }
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree as a parent array.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each visited node into `tree`.
    /// Unvisited entries remain unchanged.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let mut parents: Vec<Node> = g.vertices_range().collect();
    /// g.bfs_with_predecessor(0).parent_array_into(&mut parents);
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Parent array where every node starts as its own parent.
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Iterator implementing Kahn's algorithm on a directed graph.
///
/// - Initializes a queue with all nodes of in-degree 0 in ascending order.
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - If the graph has a cycle, iteration terminates early without covering all nodes.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();

        let queue: VecDeque<Node> = in_degs
            .iter()
            .enumerate()
            .filter_map(|(i, d)| if *d == 0 { Some(i as Node) } else { None })
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_adjacency_lists(&[vec![1, 2], vec![3], vec![], vec![]]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a stack-based iterator over all nodes reachable from `start`.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator that additionally yields the traversed tree edges.
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a stack-based iterator that additionally yields the traversed tree edges.
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns an iterator yielding the nodes reachable from `start` in **DFS preorder**.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_adjacency_lists(&[vec![1, 2], vec![3], vec![], vec![]]);
    ///
    /// let order: Vec<_> = g.dfs_preorder(0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    fn dfs_preorder(&self, start: Node) -> DfsPreorder<'_, Self> {
        DfsPreorder::new(self, start)
    }

    /// BFS order computed by recursing over the levels of the search.
    /// Produces the same order as [`Traversal::bfs`].
    fn bfs_recursive(&self, start: Node) -> Vec<Node> {
        let mut order = Vec::with_capacity(self.len());
        if !self.contains_node(start) {
            return order;
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(start);
        bfs_level(self, vec![start], &mut visited, &mut order);
        order
    }

    /// DFS preorder computed recursively.
    /// Produces the same order as [`Traversal::dfs_preorder`].
    fn dfs_recursive(&self, start: Node) -> Vec<Node> {
        let mut order = Vec::with_capacity(self.len());
        if !self.contains_node(start) {
            return order;
        }

        let mut visited = self.vertex_bitset_unset();
        dfs_visit(self, start, &mut visited, &mut order);
        order
    }

    /// Returns *true* if there is a path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).stop_at(v).any(|x| x == v)
    }

    /// Returns a shortest path (by number of edges) from `start` to `end`, both inclusive.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 3), (3, 2)]);
    /// assert_eq!(g.bfs_path(0, 2), Some(vec![0, 1, 2]));
    /// ```
    fn bfs_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut parents: Vec<Node> = self.vertices_range().collect();
        self.bfs_with_predecessor(start)
            .stop_at(end)
            .parent_array_into(&mut parents);

        if parents[end as usize] == end {
            return None;
        }

        let mut path = vec![end];
        let mut u = end;
        while u != start {
            u = parents[u as usize];
            path.push(u);
        }
        path.reverse();
        Some(path)
    }

    /// Returns an iterator yielding nodes in a **topological order** using Kahn's algorithm.
    /// Terminates early if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)]);
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: GraphType<Dir = Directed>,
    {
        TopoSearch::new(self)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    fn is_acyclic(&self) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        self.topo_search().count() == self.len()
    }
}

impl<G: AdjacencyList> Traversal for G {}

fn bfs_level<G: AdjacencyList>(
    graph: &G,
    frontier: Vec<Node>,
    visited: &mut NodeBitSet,
    order: &mut Vec<Node>,
) {
    if frontier.is_empty() {
        return;
    }

    let mut next_level = Vec::new();
    for &u in &frontier {
        for v in graph.neighbors_of(u) {
            if !visited.set_bit(v) {
                next_level.push(v);
            }
        }
    }

    order.extend(frontier);
    bfs_level(graph, next_level, visited, order);
}

fn dfs_visit<G: AdjacencyList>(graph: &G, u: Node, visited: &mut NodeBitSet, order: &mut Vec<Node>) {
    visited.set_bit(u);
    order.push(u);

    for v in graph.neighbors_of(u) {
        if !visited.get_bit(v) {
            dfs_visit(graph, v, visited, order);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    fn tree_graph() -> AdjArray {
        // 0:[1,2] 1:[0,3,4] 2:[0] 3:[1] 4:[1,5] 5:[4]
        AdjArray::from_adjacency_lists(&[
            vec![1, 2],
            vec![0, 3, 4],
            vec![0],
            vec![1],
            vec![1, 5],
            vec![4],
        ])
    }

    #[test]
    fn bfs_order() {
        let graph = tree_graph();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.bfs_recursive(0), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.bfs(4).collect_vec(), vec![4, 1, 5, 0, 3, 2]);
    }

    #[test]
    fn dfs_preorder() {
        let graph = tree_graph();
        assert_eq!(graph.dfs_preorder(0).collect_vec(), vec![0, 1, 3, 4, 5, 2]);
        assert_eq!(graph.dfs_recursive(0), vec![0, 1, 3, 4, 5, 2]);
    }

    #[test]
    fn start_outside_graph() {
        let graph = AdjArray::new(0);
        assert_eq!(graph.bfs(0).count(), 0);
        assert_eq!(graph.dfs_preorder(0).count(), 0);
        assert!(graph.bfs_recursive(0).is_empty());
        assert!(graph.dfs_recursive(0).is_empty());
    }

    #[test]
    fn stack_search_covers_reachable() {
        let graph = tree_graph();
        let mut search = graph.dfs(3);
        assert_eq!(search.by_ref().sorted().collect_vec(), (0..6).collect_vec());
        assert!(search.did_visit_node(5));

        let set_search = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 2);
        assert_eq!(set_search.count(), 6);
    }

    #[test]
    fn parent_arrays() {
        let graph = tree_graph();
        assert_eq!(graph.bfs_with_predecessor(0).parent_array(), vec![0, 0, 0, 1, 1, 4]);
        assert_eq!(graph.dfs_with_predecessor(0).parent_array(), vec![0, 0, 0, 1, 1, 4]);
    }

    #[rstest]
    #[case(0, 5, Some(vec![0, 1, 4, 5]))]
    #[case(5, 2, Some(vec![5, 4, 1, 0, 2]))]
    #[case(3, 3, Some(vec![3]))]
    #[case(0, 9, None)]
    fn shortest_hop_paths(#[case] start: Node, #[case] end: Node, #[case] path: Option<Vec<Node>>) {
        assert_eq!(tree_graph().bfs_path(start, end), path);
    }

    #[test]
    fn unreachable_path() {
        let graph = AdjArray::from_edges(3, [(0, 1), (2, 1)]);
        assert_eq!(graph.bfs_path(0, 2), None);
        assert!(!graph.is_reachable(0, 2));
        assert!(graph.is_reachable(2, 1));
    }

    #[test]
    fn kahn_order() {
        let graph = AdjArray::from_edges(6, [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)]);
        let order = graph.topo_search().collect_vec();
        assert_eq!(order, vec![4, 5, 2, 0, 3, 1]);
        assert!(graph.is_acyclic());

        let cyclic = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(cyclic.topo_search().count(), 0);
        assert!(!cyclic.is_acyclic());
    }

    #[test]
    fn recursive_variants_match_iterators() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20, 60] {
            for _ in 0..20 {
                let graph: AdjArrayUndir = WeightedGnp::new().nodes(n).prob(0.1).unweighted(rng);
                for start in [0, n / 2, n - 1] {
                    assert_eq!(graph.bfs(start).collect_vec(), graph.bfs_recursive(start));
                    assert_eq!(graph.dfs_preorder(start).collect_vec(), graph.dfs_recursive(start));
                }
            }
        }
    }
}
