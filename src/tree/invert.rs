use std::mem;

use super::*;

/// Mirrors the tree in place by swapping the children of every node
pub fn invert_tree<T>(tree: &mut Tree<T>) {
    if let Some(node) = tree {
        mem::swap(&mut node.left, &mut node.right);
        invert_tree(&mut node.left);
        invert_tree(&mut node.right);
    }
}

/// Same as [`invert_tree`] with an explicit stack
pub fn invert_tree_iterative<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<&mut TreeNode<T>> = tree.as_deref_mut().into_iter().collect();

    while let Some(node) = stack.pop() {
        mem::swap(&mut node.left, &mut node.right);
        stack.extend(node.left.as_deref_mut());
        stack.extend(node.right.as_deref_mut());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn mirror() {
        let mut tree = tree_from_level_order(&[
            Some(4),
            Some(2),
            Some(7),
            Some(1),
            Some(3),
            Some(6),
            Some(9),
        ]);
        let mirrored = tree_from_level_order(&[
            Some(4),
            Some(7),
            Some(2),
            Some(9),
            Some(6),
            Some(3),
            Some(1),
        ]);

        let mut copy = tree.clone();
        invert_tree(&mut tree);
        invert_tree_iterative(&mut copy);

        assert_eq!(tree, mirrored);
        assert_eq!(copy, mirrored);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: Tree<u32> = None;
        invert_tree(&mut empty);
        invert_tree_iterative(&mut empty);
        assert_eq!(empty, None);

        let mut single = TreeNode::leaf(1);
        invert_tree(&mut single);
        assert_eq!(single, TreeNode::leaf(1));
    }

    #[test]
    fn inversion_reverses_inorder() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..50 {
            let len = rng.random_range(0..30);
            let level_order: Vec<Option<u32>> =
                (0..len).map(|i| rng.random_bool(0.8).then_some(i)).collect();
            let original = tree_from_level_order(&level_order);

            let mut tree = original.clone();
            invert_tree(&mut tree);
            let mut expected: Vec<&u32> = original.inorder();
            expected.reverse();
            assert_eq!(tree.inorder(), expected);

            invert_tree_iterative(&mut tree);
            assert_eq!(tree, original);
        }
    }
}
