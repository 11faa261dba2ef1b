/*!
AVL tree: a binary search tree in which the heights of the two subtrees of every node differ by
at most one. Insertions and deletions restore the balance on the way back up with single
(LL, RR) or double (LR, RL) rotations.
*/

use std::cmp::Ordering;

use tracing::trace;

type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug, Clone)]
struct AvlNode<T> {
    val: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

/// Self-balancing binary search tree without duplicates
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> AvlNode<T> {
    fn new(val: T) -> Box<Self> {
        Box::new(Self {
            val,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Height of the left minus height of the right subtree
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn rotate_right<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rebalance<T>(mut node: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            trace!("LR rotation");
            node.left = node.left.take().map(rotate_left);
        } else {
            trace!("LL rotation");
        }
        rotate_right(node)
    } else if balance < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            trace!("RL rotation");
            node.right = node.right.take().map(rotate_right);
        } else {
            trace!("RR rotation");
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_into<T: Ord>(link: Link<T>, val: T, inserted: &mut bool) -> Box<AvlNode<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return AvlNode::new(val);
    };

    match val.cmp(&node.val) {
        Ordering::Less => node.left = Some(insert_into(node.left.take(), val, inserted)),
        Ordering::Greater => node.right = Some(insert_into(node.right.take(), val, inserted)),
        Ordering::Equal => return node,
    }

    rebalance(node)
}

/// Removes the minimum of a non-empty subtree; returns the remaining subtree and the minimum
fn take_min<T>(mut node: Box<AvlNode<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let AvlNode { val, right, .. } = *node;
            (right, val)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

fn delete_from<T: Ord>(link: Link<T>, val: &T, deleted: &mut bool) -> Link<T> {
    let mut node = link?;

    match val.cmp(&node.val) {
        Ordering::Less => node.left = delete_from(node.left.take(), val, deleted),
        Ordering::Greater => node.right = delete_from(node.right.take(), val, deleted),
        Ordering::Equal => {
            *deleted = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let (rest, successor) = take_min(right);
                    node.val = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
        }
    }

    Some(rebalance(node))
}

/// Returns the height if the subtree is balanced with correct stored heights and BST order
/// within `(lower, upper)`
fn checked_height<'a, T: Ord>(
    link: &'a Link<T>,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
) -> Option<usize> {
    let Some(node) = link else {
        return Some(0);
    };
    if lower.is_some_and(|l| *l >= node.val) || upper.is_some_and(|u| *u <= node.val) {
        return None;
    }

    let left = checked_height(&node.left, lower, Some(&node.val))?;
    let right = checked_height(&node.right, Some(&node.val), upper)?;
    let height = 1 + left.max(right);

    (left.abs_diff(right) <= 1 && height == node.height).then_some(height)
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `val` and returns *true* if it was not present before
    ///
    /// # Examples
    /// ```
    /// use algo_classics::tree::AvlTree;
    ///
    /// let mut avl = AvlTree::new();
    /// for val in [10, 20, 30] {
    ///     avl.insert(val);
    /// }
    /// assert_eq!(avl.root(), Some(&20));
    /// assert_eq!(avl.height(), 2);
    /// ```
    pub fn insert(&mut self, val: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert_into(self.root.take(), val, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes `val` and returns *true* if it was present
    pub fn delete(&mut self, val: &T) -> bool {
        let mut deleted = false;
        self.root = delete_from(self.root.take(), val, &mut deleted);
        if deleted {
            self.len -= 1;
        }
        deleted
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

    /// Returns all values in ascending order
    pub fn inorder(&self) -> Vec<&T> {
        fn visit<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                visit(&node.left, out);
                out.push(&node.val);
                visit(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        visit(&self.root, &mut out);
        out
    }

    /// Returns *true* if every node has a balance factor in `{-1, 0, 1}`, stored heights are
    /// correct and values are in search-tree order
    pub fn is_balanced(&self) -> bool {
        checked_height(&self.root, None, None).is_some()
    }
}

impl<T> AvlTree<T> {
    /// Number of nodes on the longest root-leaf path
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Value stored at the root
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.val)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if no value is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
