/*!
Red-black tree with nodes stored in an arena and addressed by index. Missing children (the
`NIL` leaves) are `None` and count as black.
*/

use std::cmp::Ordering;

use tracing::trace;

/// Color of a red-black tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct RbNode<T> {
    val: T,
    color: Color,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Red-black tree supporting insertion and lookup; duplicates are ignored
#[derive(Debug, Clone)]
pub struct RedBlackTree<T> {
    nodes: Vec<RbNode<T>>,
    root: Option<usize>,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl<T: Ord> RedBlackTree<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `val` and returns *true* if it was not present before
    ///
    /// # Examples
    /// ```
    /// use algo_classics::tree::{Color, RedBlackTree};
    ///
    /// let mut rb = RedBlackTree::new();
    /// for val in [10, 20, 30] {
    ///     rb.insert(val);
    /// }
    /// assert_eq!(rb.root(), Some(&20));
    /// assert_eq!(rb.color_of(&20), Some(Color::Black));
    /// assert_eq!(rb.color_of(&10), Some(Color::Red));
    /// assert!(rb.validate());
    /// ```
    pub fn insert(&mut self, val: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(idx) = current {
            parent = Some(idx);
            let node = &self.nodes[idx];
            (current, side) = match val.cmp(&node.val) {
                Ordering::Less => (node.left, Side::Left),
                Ordering::Greater => (node.right, Side::Right),
                Ordering::Equal => return false,
            };
        }

        let z = self.nodes.len();
        self.nodes.push(RbNode {
            val,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(z),
            Some(p) => *self.child_mut(p, side) = Some(z),
        }

        self.insert_fixup(z);
        true
    }

    /// Returns *true* if `val` is stored in the tree
    pub fn search(&self, val: &T) -> bool {
        self.find(val).is_some()
    }

    /// Returns the color of the node holding `val`
    pub fn color_of(&self, val: &T) -> Option<Color> {
        self.find(val).map(|idx| self.nodes[idx].color)
    }

    /// Returns *true* if all red-black properties hold:
    /// - the root is black,
    /// - no red node has a red child,
    /// - every path from a node to its `NIL` leaves has the same number of black nodes,
    /// - values are in search-tree order and parent links are consistent.
    pub fn validate(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };

        self.nodes[root].color == Color::Black
            && self.nodes[root].parent.is_none()
            && self.black_height(Some(root)).is_some()
            && self.inorder().windows(2).all(|w| w[0] < w[1])
    }

    fn find(&self, val: &T) -> Option<usize> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match val.cmp(&node.val) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(idx),
            };
        }
        None
    }
}

impl<T> RedBlackTree<T> {
    /// Value stored at the root
    pub fn root(&self) -> Option<&T> {
        self.root.map(|idx| &self.nodes[idx].val)
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if no value is stored
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all values in ascending order
    pub fn inorder(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.nodes[idx].left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };
            out.push(&self.nodes[idx].val);
            current = self.nodes[idx].right;
        }

        out
    }

    /// Number of black nodes on every path from the root to a `NIL` leaf
    pub fn black_height_of_root(&self) -> Option<usize> {
        self.black_height(self.root)
    }

    fn is_red(&self, idx: Option<usize>) -> bool {
        idx.is_some_and(|i| self.nodes[i].color == Color::Red)
    }

    fn child_mut(&mut self, idx: usize, side: Side) -> &mut Option<usize> {
        match side {
            Side::Left => &mut self.nodes[idx].left,
            Side::Right => &mut self.nodes[idx].right,
        }
    }

    /// Returns the black height of the subtree or `None` if it violates a red-black property
    fn black_height(&self, idx: Option<usize>) -> Option<usize> {
        let Some(i) = idx else {
            return Some(1);
        };
        let node = &self.nodes[i];

        if node.color == Color::Red && (self.is_red(node.left) || self.is_red(node.right)) {
            return None;
        }
        for child in [node.left, node.right].into_iter().flatten() {
            if self.nodes[child].parent != Some(i) {
                return None;
            }
        }

        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;
        (left == right).then_some(left + usize::from(node.color == Color::Black))
    }

    /// Replaces `old` by `new` in the child slot of `old`'s parent (or as root)
    fn replace_in_parent(&mut self, old: usize, new: usize) {
        let parent = self.nodes[old].parent;
        self.nodes[new].parent = parent;
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }

    fn rotate_left(&mut self, x: usize) {
        let Some(y) = self.nodes[x].right else {
            return;
        };
        trace!(x, y, "rotate left");

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        self.replace_in_parent(x, y);
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let Some(y) = self.nodes[x].left else {
            return;
        };
        trace!(x, y, "rotate right");

        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        self.replace_in_parent(x, y);
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while let Some(p) = self.nodes[z].parent {
            if self.nodes[p].color == Color::Black {
                break;
            }
            // a red parent is never the root, so the grandparent exists
            let Some(g) = self.nodes[p].parent else {
                break;
            };

            let parent_is_left = self.nodes[g].left == Some(p);
            let uncle = if parent_is_left {
                self.nodes[g].right
            } else {
                self.nodes[g].left
            };

            if let Some(u) = uncle.filter(|&u| self.nodes[u].color == Color::Red) {
                trace!(z, p, g, "recolor");
                self.nodes[p].color = Color::Black;
                self.nodes[u].color = Color::Black;
                self.nodes[g].color = Color::Red;
                z = g;
                continue;
            }

            let mut p = p;
            if parent_is_left {
                if self.nodes[p].right == Some(z) {
                    self.rotate_left(p);
                    (z, p) = (p, z);
                }
                self.nodes[p].color = Color::Black;
                self.nodes[g].color = Color::Red;
                self.rotate_right(g);
            } else {
                if self.nodes[p].left == Some(z) {
                    self.rotate_right(p);
                    (z, p) = (p, z);
                }
                self.nodes[p].color = Color::Black;
                self.nodes[g].color = Color::Red;
                self.rotate_left(g);
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }
}
