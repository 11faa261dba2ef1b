use super::*;

/// Returns *true* if both trees have the same shape and equal values at every position
pub fn is_same_tree<T: PartialEq>(a: &Tree<T>, b: &Tree<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.val == y.val && is_same_tree(&x.left, &y.left) && is_same_tree(&x.right, &y.right)
        }
        _ => false,
    }
}

/// Same as [`is_same_tree`] with an explicit stack of node pairs
pub fn is_same_tree_iterative<T: PartialEq>(a: &Tree<T>, b: &Tree<T>) -> bool {
    let mut stack = vec![(a, b)];

    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) if x.val == y.val => {
                stack.push((&x.right, &y.right));
                stack.push((&x.left, &y.left));
            }
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![Some(1), Some(2), Some(3)], vec![Some(1), Some(2), Some(3)], true)]
    #[case(vec![Some(1), Some(2)], vec![Some(1), None, Some(2)], false)]
    #[case(vec![Some(1), Some(2), Some(1)], vec![Some(1), Some(1), Some(2)], false)]
    #[case(vec![], vec![], true)]
    #[case(vec![Some(1)], vec![], false)]
    #[case(
        vec![Some(1), Some(2), Some(3), Some(4), None, Some(5)],
        vec![Some(1), Some(2), Some(3), Some(4), None, Some(5)],
        true
    )]
    #[case(
        vec![Some(1), Some(2), Some(3), Some(4), None, Some(5)],
        vec![Some(1), Some(2), Some(3), None, Some(4), Some(5)],
        false
    )]
    fn compare_trees(#[case] a: Vec<Option<u32>>, #[case] b: Vec<Option<u32>>, #[case] same: bool) {
        let a = tree_from_level_order(&a);
        let b = tree_from_level_order(&b);

        assert_eq!(is_same_tree(&a, &b), same);
        assert_eq!(is_same_tree_iterative(&a, &b), same);
        assert_eq!(is_same_tree(&b, &a), same);
        assert_eq!(is_same_tree_iterative(&b, &a), same);
    }
}
