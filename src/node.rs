/*!
# Node Representation

Graph exercises number their nodes `0..n` and use `Node = u32` for them.
Labeled inputs (`'A'`, `"B"`, ...) are translated to this numbering by
[`LabeledGraph`](crate::repr::LabeledGraph) before an algorithm ever sees them.
*/

use bitvec::prelude::*;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitVec<usize, Lsb0>;

/// Node-indexed operations on a [`NodeBitSet`]
pub trait NodeBitSetOps {
    /// Creates a bitset with `n` entries that are all unset
    fn new_unset(n: NumNodes) -> Self;

    /// Sets bit `u` and returns its previous value
    /// ** Panics if `u >= n` **
    fn set_bit(&mut self, u: Node) -> bool;

    /// Clears bit `u` and returns its previous value
    /// ** Panics if `u >= n` **
    fn clear_bit(&mut self, u: Node) -> bool;

    /// Returns *true* if bit `u` is set
    /// ** Panics if `u >= n` **
    fn get_bit(&self, u: Node) -> bool;

    /// Returns the number of set bits
    fn cardinality(&self) -> NumNodes;

    /// Returns an iterator over all set bits in ascending order
    fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_;
}

impl NodeBitSetOps for NodeBitSet {
    fn new_unset(n: NumNodes) -> Self {
        bitvec![usize, Lsb0; 0; n as usize]
    }

    fn set_bit(&mut self, u: Node) -> bool {
        self.replace(u as usize, true)
    }

    fn clear_bit(&mut self, u: Node) -> bool {
        self.replace(u as usize, false)
    }

    fn get_bit(&self, u: Node) -> bool {
        self[u as usize]
    }

    fn cardinality(&self) -> NumNodes {
        self.count_ones() as NumNodes
    }

    fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.iter_ones().map(|u| u as Node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bitset_set_and_clear() {
        let mut set = NodeBitSet::new_unset(10);
        assert_eq!(set.cardinality(), 0);

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(!set.set_bit(7));

        assert!(set.get_bit(3));
        assert!(!set.get_bit(4));
        assert_eq!(set.iter_set_bits().collect_vec(), vec![3, 7]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert_eq!(set.cardinality(), 1);
    }
}
