use std::cmp::Ordering;

use tracing::trace;

use super::*;

/// An unbalanced binary search tree without duplicates
#[derive(Debug, Clone)]
pub struct Bst<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T: Ord> Bst<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `val` and returns *true* if it was not present before.
    /// Duplicates are ignored.
    pub fn insert(&mut self, val: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match val.cmp(&node.val) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *slot = TreeNode::leaf(val);
        self.len += 1;
        true
    }

    /// Returns *true* if `val` is stored in the tree
    pub fn search(&self, val: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match val.cmp(&node.val) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Same as [`Bst::search`], descending recursively
    pub fn search_recursive(&self, val: &T) -> bool {
        fn descend<T: Ord>(tree: &Tree<T>, val: &T) -> bool {
            let Some(node) = tree else {
                return false;
            };
            match val.cmp(&node.val) {
                Ordering::Less => descend(&node.left, val),
                Ordering::Greater => descend(&node.right, val),
                Ordering::Equal => true,
            }
        }

        descend(&self.root, val)
    }

    /// Removes `val` and returns *true* if it was present.
    /// A node with two children is replaced by its in-order successor.
    pub fn delete(&mut self, val: &T) -> bool {
        let mut slot = &mut self.root;
        loop {
            let ord = match slot.as_deref() {
                Some(node) => val.cmp(&node.val),
                None => return false,
            };
            if ord == Ordering::Equal {
                break;
            }
            let Some(node) = slot else {
                return false;
            };
            slot = if ord == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(node) = slot.as_mut() else {
            return false;
        };
        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = take_min(&mut node.right) {
                trace!("replace deleted node by in-order successor");
                node.val = successor;
            }
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            *slot = child;
        }

        self.len -= 1;
        true
    }

    /// Returns the smallest value
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.val)
    }

    /// Returns the largest value
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.val)
    }

    /// Returns all values in ascending order
    pub fn inorder(&self) -> Vec<&T> {
        self.root.inorder()
    }
}

impl<T> Bst<T> {
    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if no value is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The underlying tree
    pub fn root(&self) -> &Tree<T> {
        &self.root
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bst = Self::new();
        for val in iter {
            bst.insert(val);
        }
        bst
    }
}

impl<T> Drop for Bst<T> {
    fn drop(&mut self) {
        // degenerate trees are as deep as they are long
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Removes the leftmost node of a non-empty tree and returns its value
fn take_min<T>(tree: &mut Tree<T>) -> Option<T> {
    let mut slot = tree;
    while slot.as_ref()?.left.is_some() {
        let Some(node) = slot else {
            return None;
        };
        slot = &mut node.left;
    }

    let node = slot.take()?;
    let TreeNode { val, right, .. } = *node;
    *slot = right;
    Some(val)
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn values(bst: &Bst<i32>) -> Vec<i32> {
        bst.inorder().into_iter().copied().collect_vec()
    }

    #[test]
    fn search_insert_delete() {
        let mut bst: Bst<i32> = [7, 3, 9, 1, 5].into_iter().collect();

        assert!(bst.search(&5));
        assert!(bst.search_recursive(&5));
        assert!(!bst.search(&4));
        assert!(!bst.search_recursive(&4));

        assert!(bst.insert(4));
        assert!(bst.search(&4));
        assert_eq!(values(&bst), vec![1, 3, 4, 5, 7, 9]);

        assert!(bst.delete(&3));
        assert!(!bst.search(&3));
        assert_eq!(values(&bst), vec![1, 4, 5, 7, 9]);
    }

    #[rstest]
    #[case(3, vec![1, 5, 7, 9])]
    #[case(7, vec![1, 3, 5, 9])]
    #[case(1, vec![3, 5, 7, 9])]
    #[case(9, vec![1, 3, 5, 7])]
    #[case(4, vec![1, 3, 5, 7, 9])]
    fn delete_cases(#[case] val: i32, #[case] expected: Vec<i32>) {
        let mut bst: Bst<i32> = [7, 3, 9, 1, 5].into_iter().collect();
        assert_eq!(bst.delete(&val), expected.len() == 4);
        assert_eq!(values(&bst), expected);
        assert_eq!(bst.len(), expected.len());
    }

    #[test]
    fn successor_replaces_root() {
        let mut bst: Bst<i32> = [7, 3, 9, 1, 5].into_iter().collect();
        bst.delete(&7);
        assert_eq!(bst.root().as_ref().map(|node| node.val), Some(9));
    }

    #[test]
    fn duplicates_and_extremes() {
        let mut bst = Bst::new();
        assert!(bst.is_empty());
        assert_eq!(bst.min(), None);
        assert_eq!(bst.max(), None);

        for val in [5, 2, 8, 2, 5] {
            bst.insert(val);
        }
        assert!(!bst.insert(8));
        assert_eq!(bst.len(), 3);
        assert_eq!(bst.min(), Some(&2));
        assert_eq!(bst.max(), Some(&8));
    }

    #[test]
    fn sorted_inserts_build_a_long_chain() {
        let n = 30_000u32;
        let mut bst: Bst<u32> = (0..n).collect();
        assert_eq!(bst.len(), n as usize);
        assert!(bst.search(&(n - 1)));
        assert!(!bst.insert(n - 1));

        assert!(bst.delete(&(n - 1)));
        assert!(bst.delete(&0));
        assert!(!bst.delete(&n));
        assert_eq!(bst.len(), n as usize - 2);
        assert_eq!(bst.min(), Some(&1));
        assert_eq!(bst.max(), Some(&(n - 2)));
    }

    #[test]
    fn delete_node_with_two_children_deep_in_the_tree() {
        let mut bst: Bst<i32> = [50, 30, 70, 20, 40, 60, 80, 35, 45, 42].into_iter().collect();
        assert!(bst.delete(&30));
        assert_eq!(values(&bst), vec![20, 35, 40, 42, 45, 50, 60, 70, 80]);
        assert!(bst.delete(&40));
        assert_eq!(values(&bst), vec![20, 35, 42, 45, 50, 60, 70, 80]);
    }

    #[test]
    fn matches_btreeset() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut bst = Bst::new();
        let mut reference = BTreeSet::new();

        for _ in 0..2000 {
            let val: i32 = rng.random_range(-50..50);
            if rng.random_bool(0.6) {
                assert_eq!(bst.insert(val), reference.insert(val));
            } else {
                assert_eq!(bst.delete(&val), reference.remove(&val));
            }
            assert_eq!(bst.len(), reference.len());
        }

        assert_eq!(values(&bst), reference.iter().copied().collect_vec());
        assert_eq!(bst.min(), reference.first());
        assert_eq!(bst.max(), reference.last());
    }
}
