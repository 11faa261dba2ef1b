use std::collections::VecDeque;

use fxhash::FxHashSet;

use super::*;

/// Returns the value of the deepest node that has both a node holding `p` and a node holding `q`
/// in its subtree (a node is in its own subtree). Returns `None` if `p` or `q` is missing.
/// If values occur more than once, the first occurrence in level order counts.
///
/// # Examples
/// ```
/// use algo_classics::tree::*;
///
/// let tree = tree_from_level_order(&[Some(3), Some(5), Some(1), Some(6), Some(2)]);
/// assert_eq!(lowest_common_ancestor(&tree, &6, &2), Some(&5));
/// assert_eq!(lowest_common_ancestor(&tree, &6, &1), Some(&3));
/// ```
pub fn lowest_common_ancestor<'a, T: PartialEq>(
    root: &'a Tree<T>,
    p: &T,
    q: &T,
) -> Option<&'a T> {
    lowest_common_ancestor_iterative(root, p, q)
}

/// Recursive post-order variant of [`lowest_common_ancestor`] for trees with distinct values
pub fn lowest_common_ancestor_recursive<'a, T: PartialEq>(
    root: &'a Tree<T>,
    p: &T,
    q: &T,
) -> Option<&'a T> {
    LcaSearch::visit(root, p, q).ancestor
}

/// Iterative variant of [`lowest_common_ancestor`] that records the parent of every node during
/// a BFS and then intersects the ancestor chains of `p` and `q`
pub fn lowest_common_ancestor_iterative<'a, T: PartialEq>(
    root: &'a Tree<T>,
    p: &T,
    q: &T,
) -> Option<&'a T> {
    let mut nodes: Vec<&TreeNode<T>> = Vec::new();
    let mut parents: Vec<Option<usize>> = Vec::new();
    let mut queue: VecDeque<(&TreeNode<T>, Option<usize>)> =
        root.as_deref().map(|node| (node, None)).into_iter().collect();

    while let Some((node, parent)) = queue.pop_front() {
        let idx = nodes.len();
        nodes.push(node);
        parents.push(parent);
        for child in [&node.left, &node.right] {
            if let Some(child) = child.as_deref() {
                queue.push_back((child, Some(idx)));
            }
        }
    }

    let p_idx = nodes.iter().position(|node| node.val == *p)?;
    let q_idx = nodes.iter().position(|node| node.val == *q)?;

    let mut ancestors = FxHashSet::default();
    let mut current = Some(p_idx);
    while let Some(idx) = current {
        ancestors.insert(idx);
        current = parents[idx];
    }

    let mut current = Some(q_idx);
    while let Some(idx) = current {
        if ancestors.contains(&idx) {
            let node = nodes[idx];
            return Some(&node.val);
        }
        current = parents[idx];
    }

    None
}

struct LcaSearch<'a, T> {
    has_p: bool,
    has_q: bool,
    ancestor: Option<&'a T>,
}

impl<'a, T: PartialEq> LcaSearch<'a, T> {
    fn visit(tree: &'a Tree<T>, p: &T, q: &T) -> Self {
        let Some(node) = tree.as_deref() else {
            return Self {
                has_p: false,
                has_q: false,
                ancestor: None,
            };
        };

        let left = Self::visit(&node.left, p, q);
        if left.ancestor.is_some() {
            return left;
        }
        let right = Self::visit(&node.right, p, q);
        if right.ancestor.is_some() {
            return right;
        }

        let has_p = left.has_p || right.has_p || node.val == *p;
        let has_q = left.has_q || right.has_q || node.val == *q;
        Self {
            has_p,
            has_q,
            ancestor: (has_p && has_q).then_some(&node.val),
        }
    }
}
