/*!
# Binary Trees

Owned binary trees ([`TreeNode`], [`Tree`]) with the classic exercises on them:
- traversals in pre-, in-, post- and level order via the [`TreeTraversal`] trait,
- structural comparison, inversion and lowest common ancestors,
- search trees: the unbalanced [`Bst`], the [`AvlTree`] and the arena-based [`RedBlackTree`].

Trees are most easily built from LeetCode-style level orders:

```
use algo_classics::tree::*;

let tree = tree_from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
assert_eq!(tree.preorder(), vec![&1, &2, &4, &5, &3]);
assert_eq!(tree.inorder(), vec![&4, &2, &5, &1, &3]);
assert_eq!(tree.postorder(), vec![&4, &5, &2, &3, &1]);
```
*/

mod avl;
mod bst;
mod compare;
mod invert;
mod lca;
mod node;
mod red_black;
mod traversal;

pub use avl::*;
pub use bst::*;
pub use compare::*;
pub use invert::*;
pub use lca::*;
pub use node::*;
pub use red_black::*;
pub use traversal::*;
