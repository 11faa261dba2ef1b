use std::ops::RangeInclusive;

use itertools::Itertools;
use rand_distr::{Distribution, Geometric};
use tracing::trace;

use super::*;

/// `G(n,p)` generator with uniform integer weights.
///
/// Every possible edge without self-loops is included independently with probability `p`.
/// For undirected targets only edges `(u, v)` with `u < v` are drawn. If `connected` is set, a
/// random spanning tree rooted at `0` is added on top so that every node is reachable from `0`.
#[derive(Debug, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: f64,
    weights: RangeInclusive<u32>,
    connected: bool,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            weights: 1..=10,
            connected: false,
        }
    }
}

impl WeightedGnp {
    /// Creates a new generator with `n = 0`, `p = 0` and weights in `1..=10`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    /// ** Panics if `p` is not a valid probability **
    pub fn set_prob(&mut self, prob: f64) {
        assert!(prob.is_valid_probability());
        self.p = prob;
    }

    /// Updates `p`
    /// ** Panics if `p` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        self.set_prob(prob);
        self
    }

    /// Sets the inclusive range edge weights are drawn from
    /// ** Panics if the range is empty **
    pub fn set_weights(&mut self, weights: RangeInclusive<u32>) {
        assert!(!weights.is_empty());
        self.weights = weights;
    }

    /// Sets the inclusive range edge weights are drawn from
    /// ** Panics if the range is empty **
    pub fn weights(mut self, weights: RangeInclusive<u32>) -> Self {
        self.set_weights(weights);
        self
    }

    /// If set, a random spanning tree is added to the random edges
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// If set, a random spanning tree is added to the random edges
    pub fn connected(mut self, connected: bool) -> Self {
        self.set_connected(connected);
        self
    }

    /// Draws the edge set: sorted, without duplicates and without self-loops.
    /// Undirected edges are normalized.
    pub fn edges<R: Rng>(&self, rng: &mut R, directed: bool) -> Vec<Edge> {
        let n = self.n as u64;
        let mut edges = Vec::new();

        // geometric jumps over the `n * n` candidate pairs
        if let Ok(jumps) = Geometric::new(self.p) {
            if self.p > 0.0 {
                let max_value = n * n;
                let mut x = 0u64;
                loop {
                    x = x.saturating_add(jumps.sample(rng));
                    if x >= max_value {
                        break;
                    }

                    let e = Edge::from_u64(x, n);
                    if !e.is_loop() && (directed || e.is_normalized()) {
                        edges.push(e);
                    }
                    x += 1;
                }
            }
        }

        if self.connected && self.n > 0 {
            edges.extend(
                Mst::new()
                    .nodes(self.n)
                    .generate(rng)
                    .into_iter()
                    .map(|e| if directed { e } else { e.normalized() }),
            );
        }

        edges.sort_unstable();
        edges.dedup();

        trace!(n = self.n, m = edges.len(), directed, "generated gnp edges");
        edges
    }

    /// Draws the edge set as in [`WeightedGnp::edges`] and attaches a uniform weight to each edge
    pub fn weighted_edges<W, R>(&self, rng: &mut R, directed: bool) -> Vec<WeightedEdge<W>>
    where
        W: From<u32>,
        R: Rng,
    {
        self.edges(rng, directed)
            .into_iter()
            .map(|Edge(u, v)| WeightedEdge(u, v, W::from(rng.random_range(self.weights.clone()))))
            .collect_vec()
    }

    /// Creates an unweighted graph; orientation is taken from the graph type
    pub fn unweighted<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromScratch + GraphType,
        R: Rng,
    {
        G::from_edges(self.n, self.edges(rng, G::is_directed()))
    }

    /// Creates a weighted graph; orientation is taken from `D`
    pub fn weighted<W, D, R>(&self, rng: &mut R) -> WeightedAdjArrayImpl<W, D>
    where
        W: Weight + From<u32>,
        D: GraphDir,
        R: Rng,
    {
        WeightedAdjArrayImpl::from_weighted_edges(self.n, self.weighted_edges(rng, D::DIRECTED))
    }
}

impl NumNodesGen for WeightedGnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}
