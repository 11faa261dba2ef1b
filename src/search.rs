/*!
# Searching

Linear search over arbitrary slices and binary search over slices sorted in ascending order.
Every search has an iterative and a recursive form that return the same index.
*/

use std::cmp::Ordering;

/// Returns the index of the first element equal to `target`
///
/// # Examples
/// ```
/// use algo_classics::search::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 7, 2], &2), Some(1));
/// assert_eq!(linear_search(&[4, 2, 7, 2], &5), None);
/// ```
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|val| val == target)
}

/// Same as [`linear_search`] but recurses on the tail of the slice
pub fn linear_search_recursive<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    if first == target {
        Some(0)
    } else {
        linear_search_recursive(rest, target).map(|idx| idx + 1)
    }
}

/// Returns the index of an element equal to `target` in the ascending slice `values`.
/// If `values` is not sorted, the result is unspecified (but no panic occurs).
///
/// # Examples
/// ```
/// use algo_classics::search::binary_search;
///
/// let values = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&values, &7), Some(3));
/// assert_eq!(binary_search(&values, &4), None);
/// assert_eq!(binary_search::<u32>(&[], &4), None);
/// ```
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    // invariant: a match can only be in `lo..hi`
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Same as [`binary_search`] but recurses into the half that may hold `target`
pub fn binary_search_recursive<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    match values[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => binary_search_recursive(&values[..mid], target),
        Ordering::Less => {
            binary_search_recursive(&values[mid + 1..], target).map(|idx| idx + mid + 1)
        }
    }
}
