/*!
# Utilities

Provides a few helper traits/structs shared by the exercises:
- abstractions over [`Set`] so traversals can choose between bitsets and hash sets,
- [`UnionFind`], the disjoint-set forest behind Kruskal and undirected cycle detection,
- [`Probability`] and [`FromCapacity`] helper traits.
*/

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use num::{One, Zero};

use crate::node::*;

pub mod set;
pub mod union_find;

pub use set::Set;
pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // A bitset has to cover the maximum element
        NodeBitSet::new_unset(total as NumNodes)
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // A hash set only needs room for the elements actually inserted
        Self::with_capacity_and_hasher(used, S::default())
    }
}

impl<K, V, S> FromCapacity for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, S::default())
    }
}
