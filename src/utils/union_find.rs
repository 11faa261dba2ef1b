/*!
# Union-Find

A disjoint-set forest over the nodes `0..n` with path compression and union by rank.
*/

use crate::node::*;

/// Disjoint-set forest over `0..n`
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the representative of the set containing `u`
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // path compression
        let mut node = u;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`.
    /// Returns *false* if both were already in the same set.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        let (ru, rv) = (ru as usize, rv as usize);
        match self.rank[ru].cmp(&self.rank[rv]) {
            std::cmp::Ordering::Less => self.parent[ru] = rv as Node,
            std::cmp::Ordering::Greater => self.parent[rv] = ru as Node,
            std::cmp::Ordering::Equal => {
                self.parent[rv] = ru as Node;
                self.rank[ru] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn merge_sets() {
        let mut uf = UnionFind::new(6);
        assert_eq!(uf.number_of_sets(), 6);

        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));

        assert!(uf.same_set(0, 3));
        assert!(!uf.same_set(0, 4));
        assert_eq!(uf.number_of_sets(), 3);
    }

    #[test]
    fn long_chain_is_compressed() {
        let mut uf = UnionFind::new(100);
        for u in 1..100 {
            uf.union(u - 1, u);
        }
        let root = uf.find(99);
        assert!((0..100).all(|u| uf.find(u) == root));
        assert_eq!(uf.number_of_sets(), 1);
    }
}
