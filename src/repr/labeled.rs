/*!
# Labeled Graphs

Exercises often describe graphs as adjacency lists over labels such as `'A'` or `"Berlin"`.
[`LabeledGraph`] assigns nodes `0..n` to labels in first-seen order (first all keys, then labels
that only occur as neighbors), stores the graph in any representation and translates results
back to labels.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use crate::algo::{ShortestPath, Traversal};

use super::*;

/// A graph over arbitrary hashable labels
#[derive(Clone)]
pub struct LabeledGraph<L, G> {
    graph: G,
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
}

/// Assigns nodes to labels in first-seen order
struct LabelIndex<L> {
    labels: Vec<L>,
    index: FxHashMap<L, Node>,
}

impl<L: Clone + Eq + Hash> LabelIndex<L> {
    fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn intern(&mut self, label: &L) -> Node {
        if let Some(&u) = self.index.get(label) {
            return u;
        }

        let u = self.labels.len() as Node;
        self.labels.push(label.clone());
        self.index.insert(label.clone(), u);
        u
    }

    fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    fn into_graph<G>(self, graph: G) -> LabeledGraph<L, G> {
        LabeledGraph {
            graph,
            labels: self.labels,
            index: self.index,
        }
    }
}

impl<L, G> LabeledGraph<L, G>
where
    L: Clone + Eq + Hash + Debug,
{
    /// Returns the underlying graph
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the node of a label
    pub fn node(&self, label: &L) -> Result<Node> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{label:?}")))
    }

    /// Returns the label of a node
    pub fn label(&self, u: Node) -> Option<&L> {
        self.labels.get(u as usize)
    }

    /// Returns all labels in node order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    fn to_labels(&self, nodes: impl IntoIterator<Item = Node>) -> Vec<L> {
        nodes
            .into_iter()
            .map(|u| self.labels[u as usize].clone())
            .collect()
    }
}

impl<L, G> LabeledGraph<L, G>
where
    L: Clone + Eq + Hash + Debug,
    G: GraphNew + GraphEdgeEditing,
{
    /// Builds a graph from `(label, neighbors)` pairs. Every neighbor `v` of `u` adds the edge
    /// `(u, v)`; edges that already exist are skipped.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::prelude::*;
    ///
    /// let g: LabeledGraph<char, AdjArray> =
    ///     LabeledGraph::from_adjacency([('A', vec!['B', 'C']), ('B', vec!['D'])]);
    /// assert_eq!(g.bfs(&'A').unwrap(), vec!['A', 'B', 'C', 'D']);
    /// ```
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = L>,
    {
        let lists: Vec<(L, Vec<L>)> = adjacency
            .into_iter()
            .map(|(u, nbs)| (u, nbs.into_iter().collect()))
            .collect();

        let mut index = LabelIndex::new();
        for (u, _) in &lists {
            index.intern(u);
        }
        for (_, nbs) in &lists {
            for v in nbs {
                index.intern(v);
            }
        }

        let mut graph = G::new(index.len());
        for (u, nbs) in &lists {
            let u = index.intern(u);
            for v in nbs {
                let v = index.intern(v);
                graph.try_add_edge(u, v);
            }
        }

        index.into_graph(graph)
    }
}

impl<L, W, D> LabeledGraph<L, WeightedAdjArrayImpl<W, D>>
where
    L: Clone + Eq + Hash + Debug,
    W: Weight,
    D: GraphDir,
{
    /// Builds a weighted graph from `(label, [(neighbor, weight)])` pairs.
    /// For undirected graphs every edge should be listed once, as each entry adds an edge.
    pub fn from_weighted_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        N: IntoIterator<Item = (L, W)>,
    {
        let lists: Vec<(L, Vec<(L, W)>)> = adjacency
            .into_iter()
            .map(|(u, nbs)| (u, nbs.into_iter().collect()))
            .collect();

        let mut index = LabelIndex::new();
        for (u, _) in &lists {
            index.intern(u);
        }
        for (_, nbs) in &lists {
            for (v, _) in nbs {
                index.intern(v);
            }
        }

        let mut graph = WeightedAdjArrayImpl::new(index.len());
        for (u, nbs) in &lists {
            let u = index.intern(u);
            for (v, w) in nbs {
                let v = index.intern(v);
                graph.add_weighted_edge(u, v, *w);
            }
        }

        index.into_graph(graph)
    }
}

impl<L, G> LabeledGraph<L, G>
where
    L: Clone + Eq + Hash + Debug,
    G: AdjacencyList,
{
    /// Labels in BFS order from `start`
    pub fn bfs(&self, start: &L) -> Result<Vec<L>> {
        Ok(self.to_labels(self.graph.bfs(self.node(start)?)))
    }

    /// Labels in DFS preorder from `start`
    pub fn dfs(&self, start: &L) -> Result<Vec<L>> {
        Ok(self.to_labels(self.graph.dfs_preorder(self.node(start)?)))
    }
}

impl<L, G> LabeledGraph<L, G>
where
    L: Clone + Eq + Hash + Debug,
    G: WeightedAdjacencyList,
{
    /// Distance from `source` to every label; `None` if unreachable
    pub fn dijkstra(&self, source: &L) -> Result<FxHashMap<L, Option<G::Weight>>> {
        let distances = self.graph.dijkstra(self.node(source)?);
        Ok(self.labels.iter().cloned().zip(distances).collect())
    }
}

impl<L: Debug, G: Debug> Debug for LabeledGraph<L, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabeledGraph")
            .field("labels", &self.labels)
            .field("graph", &self.graph)
            .finish()
    }
}
