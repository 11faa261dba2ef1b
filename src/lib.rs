/*!
`algo_classics` is a catalogue of classic algorithm and data-structure exercises, each one a
small, self-contained and tested implementation:

- **graphs**: traversals, cycle detection, articulation points and bridges, shortest paths,
  spanning trees, topological sorting and Hamiltonian paths/cycles,
- **grids**: A* search and a maze solver on 0/1 grids,
- **binary trees**: traversals, comparison, inversion, lowest common ancestors as well as
  BST, AVL and red-black trees,
- **collections**: lists, stacks, queues, ring buffers, heaps, hash maps, an LRU cache and a trie,
- **searching and sorting**, **greedy algorithms** and **dynamic programming**.

# Representation

Graph exercises share one graph core. We represent **nodes** as `u32` in the range `0..n` where
`n` is the number of nodes in the graph; **edges** are the tuple-struct `Edge(Node, Node)`.
Exercises that come with labeled nodes (`'A'`, `"B"`, ...) go through
[`LabeledGraph`](crate::repr::LabeledGraph), which translates labels to nodes and back.

See the [`repr`] module for the available storage backends: adjacency arrays, sparse adjacency
arrays and bitset adjacency matrices, each directed or undirected, plus a weighted adjacency list.

# Design

Configurable algorithms and generators are structs that one alters with either the *Builder* or
the *Setter* pattern before running them, e.g. `AStar::new().diagonal(true)`.
Graph algorithms are extension traits implemented for every fitting representation, so
`graph.bfs(0)` works without any configuration.

Genuine failures (a full bounded queue, a zero capacity, mismatched input lengths, an unknown
label) are reported as [`error::Error`]; absent results (no path, an empty pop, a missed search)
are `None`.

# Usage

In most use-cases, `use algo_classics::{prelude::*, algo::*};` suffices for the graph exercises;
all other exercises live in their own top-level module.
*/

pub mod algo;
pub mod collections;
pub mod dp;
pub mod edge;
pub mod error;
pub mod gens;
pub mod greedy;
pub mod grid;
pub mod node;
pub mod ops;
pub mod repr;
pub mod search;
pub mod sort;
pub(crate) mod testing;
pub mod tree;
pub mod utils;

/// `algo_classics::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
