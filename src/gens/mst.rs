/*!
# Random Spanning Trees

[`Mst`] draws a random spanning tree on `n` nodes: the result is connected, has exactly `n - 1`
edges and, read as directed edges, every edge points away from the root (default `0`).
*/

use rand_distr::{Distribution, Uniform};

use super::*;

/// Generator for a random spanning tree rooted at `root`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Mst {
    n: NumNodes,
    root: Node,
}

impl Mst {
    /// Creates a new generator with `n = 0` and `root = 0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root node of the tree.
    /// ** Panics if `root >= n` when used in generation **
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the root node of the tree.
    /// ** Panics if `root >= n` when used in generation **
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Returns an iterator over the `n - 1` tree edges
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> MstGenerator<'a, R> {
        MstGenerator::new(self.n, self.root, rng)
    }

    /// Collects all tree edges
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Edge> {
        self.stream(rng).collect()
    }
}

impl NumNodesGen for Mst {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

/// Streaming generator for tree edges.
///
/// Repeatedly walks randomly from an unconnected node, rejecting nodes already on the walk, until
/// the walk hits the connected component. The walk is then attached edge by edge.
pub struct MstGenerator<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    node_gen: Option<Uniform<Node>>,
    connected: NodeBitSet,
    on_path: NodeBitSet,
    path: Vec<Node>,
    path_skip: usize,
}

impl<'a, R> MstGenerator<'a, R>
where
    R: Rng,
{
    /// Creates a new generator for a tree of `n` nodes rooted at `root`.
    /// ** Panics if `n > 0` and `root >= n` **
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        let mut connected = NodeBitSet::new_unset(n);
        if n > 0 {
            assert!(root < n);
            connected.set_bit(root);
        }

        Self {
            rng,
            node_gen: Uniform::new(0, n).ok(),
            connected,
            on_path: NodeBitSet::new_unset(n),
            path: Vec::new(),
            path_skip: usize::MAX - 1,
        }
    }
}

impl<R> Iterator for MstGenerator<'_, R>
where
    R: Rng,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.path_skip + 1 < self.path.len() {
            self.path_skip += 1;
            return Some(Edge(
                self.path[self.path_skip],
                self.path[self.path_skip - 1],
            ));
        }

        if self.connected.all() {
            return None;
        }
        let node_gen = self.node_gen.as_ref()?;

        self.path_skip = usize::MAX - 1;
        self.on_path.fill(false);
        self.path.clear();

        loop {
            let u = node_gen.sample(self.rng);

            if self.path.is_empty() && self.connected.get_bit(u) {
                continue;
            }

            if self.on_path.set_bit(u) {
                // avoid loops
                continue;
            }

            self.path.push(u);

            if self.connected.set_bit(u) {
                self.path_skip = 1;
                return Some(Edge(self.path[1], self.path[0]));
            }
        }
    }
}
