use std::collections::VecDeque;

/// A node of an owned binary tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub val: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

/// A possibly empty binary tree
pub type Tree<T> = Option<Box<TreeNode<T>>>;

impl<T> TreeNode<T> {
    /// Creates a node without children
    pub fn new(val: T) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a tree consisting of a single node
    pub fn leaf(val: T) -> Tree<T> {
        Some(Box::new(Self::new(val)))
    }

    /// Creates a tree with the given root value and subtrees
    pub fn with_children(val: T, left: Tree<T>, right: Tree<T>) -> Tree<T> {
        Some(Box::new(Self { val, left, right }))
    }
}

/// Returns the number of nodes in the tree
pub fn tree_size<T>(tree: &Tree<T>) -> usize {
    tree.as_ref()
        .map_or(0, |node| 1 + tree_size(&node.left) + tree_size(&node.right))
}

/// Returns the number of nodes on the longest root-leaf path; the empty tree has height 0
pub fn tree_height<T>(tree: &Tree<T>) -> usize {
    tree.as_ref().map_or(0, |node| {
        1 + tree_height(&node.left).max(tree_height(&node.right))
    })
}

/// Builds a tree from its level order, where `None` marks a missing child.
///
/// As on LeetCode, missing nodes do not have placeholders for their children: the entries
/// after the root are assigned pairwise as left/right child to the present nodes in level order.
/// Trailing entries without a parent are ignored.
pub fn tree_from_level_order<T: Clone>(values: &[Option<T>]) -> Tree<T> {
    let Some(Some(root)) = values.first() else {
        return None;
    };

    let mut nodes: Vec<Slot<T>> = vec![Some((root.clone(), None, None))];
    let mut parents = VecDeque::from([0usize]);
    let mut entries = values[1..].iter();

    while let Some(parent) = parents.pop_front() {
        for is_left in [true, false] {
            let Some(entry) = entries.next() else {
                return assemble(&mut nodes, 0);
            };
            let Some(val) = entry else {
                continue;
            };

            let child = nodes.len();
            nodes.push(Some((val.clone(), None, None)));
            parents.push_back(child);

            if let Some((_, left, right)) = nodes[parent].as_mut() {
                if is_left {
                    *left = Some(child);
                } else {
                    *right = Some(child);
                }
            }
        }
    }

    assemble(&mut nodes, 0)
}

/// `(value, left child, right child)` with children as indices into the slot array
type Slot<T> = Option<(T, Option<usize>, Option<usize>)>;

fn assemble<T>(nodes: &mut [Slot<T>], idx: usize) -> Tree<T> {
    let (val, left, right) = nodes.get_mut(idx)?.take()?;
    let left = left.and_then(|l| assemble(nodes, l));
    let right = right.and_then(|r| assemble(nodes, r));
    TreeNode::with_children(val, left, right)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn level_order_with_gaps() {
        let tree = tree_from_level_order(&[Some(1), None, Some(2), Some(3)]);
        let expected = TreeNode::with_children(
            1,
            None,
            TreeNode::with_children(2, TreeNode::leaf(3), None),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn level_order_complete() {
        let values = [Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(6)];
        let tree = tree_from_level_order(&values);
        assert_eq!(tree_size(&tree), 6);
        assert_eq!(tree_height(&tree), 3);

        let root = tree.unwrap();
        assert_eq!(root.left.as_ref().unwrap().val, 2);
        assert_eq!(root.right.as_ref().unwrap().right.as_ref().unwrap().val, 6);
        assert!(root.right.as_ref().unwrap().left.is_none());
    }

    #[test]
    fn empty_level_order() {
        assert_eq!(tree_from_level_order::<u32>(&[]), None);
        assert_eq!(tree_from_level_order::<u32>(&[None, Some(1)]), None);
        assert_eq!(tree_size::<u32>(&None), 0);
        assert_eq!(tree_height::<u32>(&None), 0);
    }
}
