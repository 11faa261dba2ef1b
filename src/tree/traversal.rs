use std::collections::VecDeque;

use super::*;

/// Traversals of binary trees. Every order comes in a recursive and an iterative flavor which
/// return the same sequence.
pub trait TreeTraversal<T> {
    /// Root, left subtree, right subtree
    fn preorder(&self) -> Vec<&T>;

    /// Same as [`TreeTraversal::preorder`] using an explicit stack
    fn preorder_iterative(&self) -> Vec<&T>;

    /// Left subtree, root, right subtree
    fn inorder(&self) -> Vec<&T>;

    /// Same as [`TreeTraversal::inorder`] using an explicit stack
    fn inorder_iterative(&self) -> Vec<&T>;

    /// Left subtree, right subtree, root
    fn postorder(&self) -> Vec<&T>;

    /// Same as [`TreeTraversal::postorder`] using an explicit stack
    fn postorder_iterative(&self) -> Vec<&T>;

    /// Breadth-first order, each level from left to right
    fn level_order(&self) -> Vec<&T>;

    /// Same as [`TreeTraversal::level_order`], but nodes are collected recursively by depth
    fn level_order_recursive(&self) -> Vec<&T>;

    /// Returns the values grouped by depth
    fn levels(&self) -> Vec<Vec<&T>>;

    /// Depth-first order, which is the preorder
    fn dfs(&self) -> Vec<&T> {
        self.preorder_iterative()
    }

    /// Returns *true* if some node holds `target`, searching depth-first
    fn dfs_search(&self, target: &T) -> bool
    where
        T: PartialEq;
}

impl<T> TreeTraversal<T> for Tree<T> {
    fn preorder(&self) -> Vec<&T> {
        fn visit<'a, T>(tree: &'a Tree<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = tree {
                out.push(&node.val);
                visit(&node.left, out);
                visit(&node.right, out);
            }
        }

        let mut out = Vec::new();
        visit(self, &mut out);
        out
    }

    fn preorder_iterative(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = self.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            out.push(&node.val);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        out
    }

    fn inorder(&self) -> Vec<&T> {
        fn visit<'a, T>(tree: &'a Tree<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = tree {
                visit(&node.left, out);
                out.push(&node.val);
                visit(&node.right, out);
            }
        }

        let mut out = Vec::new();
        visit(self, &mut out);
        out
    }

    fn inorder_iterative(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }

            let Some(node) = stack.pop() else {
                break;
            };
            out.push(&node.val);
            current = node.right.as_deref();
        }

        out
    }

    fn postorder(&self) -> Vec<&T> {
        fn visit<'a, T>(tree: &'a Tree<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = tree {
                visit(&node.left, out);
                visit(&node.right, out);
                out.push(&node.val);
            }
        }

        let mut out = Vec::new();
        visit(self, &mut out);
        out
    }

    fn postorder_iterative(&self) -> Vec<&T> {
        // root-right-left preorder, reversed
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = self.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            out.push(&node.val);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        out.reverse();
        out
    }

    fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&TreeNode<T>> = self.as_deref().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            out.push(&node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }

        out
    }

    fn level_order_recursive(&self) -> Vec<&T> {
        fn collect<'a, T>(tree: &'a Tree<T>, depth: usize, levels: &mut Vec<Vec<&'a T>>) {
            let Some(node) = tree else {
                return;
            };
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(&node.val);
            collect(&node.left, depth + 1, levels);
            collect(&node.right, depth + 1, levels);
        }

        let mut levels = Vec::new();
        collect(self, 0, &mut levels);
        levels.into_iter().flatten().collect()
    }

    fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&TreeNode<T>> = self.as_deref().into_iter().collect();

        while !queue.is_empty() {
            let level: Vec<&TreeNode<T>> = queue.drain(..).collect();
            for node in &level {
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            levels.push(level.into_iter().map(|node| &node.val).collect());
        }

        levels
    }

    fn dfs_search(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_ref().is_some_and(|node| {
            node.val == *target || node.left.dfs_search(target) || node.right.dfs_search(target)
        })
    }
}
