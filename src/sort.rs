/*!
# Sorting

- [`quick_sort`] and [`quick_sort_iterative`] sort in place using the Lomuto partition scheme
  with the last element as pivot,
- [`merge_sort`] (top-down) and [`merge_sort_iterative`] (bottom-up) return a new, stably sorted
  `Vec`.

A heap-based in-place sort lives next to the heaps in
[`collections::heap_sort`](crate::collections::heap_sort).
*/

use tracing::trace;

/// Moves the pivot `values[last]` to its final position and returns that position.
/// Afterwards all elements left of it are smaller, all elements right of it are not.
fn lomuto_partition<T: Ord>(values: &mut [T]) -> usize {
    let pivot = values.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if values[i] < values[pivot] {
            values.swap(i, store);
            store += 1;
        }
    }
    values.swap(store, pivot);
    store
}

/// Sorts `values` ascending with recursive quick sort.
/// Recursion only descends into the smaller part, so the stack depth stays logarithmic.
///
/// # Examples
/// ```
/// use algo_classics::sort::quick_sort;
///
/// let mut values = vec![3, -1, 2, 2, 0];
/// quick_sort(&mut values);
/// assert_eq!(values, vec![-1, 0, 2, 2, 3]);
/// ```
pub fn quick_sort<T: Ord>(mut values: &mut [T]) {
    while values.len() > 1 {
        let p = lomuto_partition(values);
        let (left, right) = std::mem::take(&mut values).split_at_mut(p);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            values = right;
        } else {
            quick_sort(right);
            values = left;
        }
    }
}

/// Same as [`quick_sort`] but keeps the ranges still to be partitioned on an explicit stack
pub fn quick_sort_iterative<T: Ord>(values: &mut [T]) {
    let mut ranges = vec![(0, values.len())];
    while let Some((lo, hi)) = ranges.pop() {
        if hi - lo < 2 {
            continue;
        }
        let p = lo + lomuto_partition(&mut values[lo..hi]);
        trace!(lo, hi, pivot = p, "partitioned range");
        ranges.push((lo, p));
        ranges.push((p + 1, hi));
    }
}

/// Merges two ascending slices; on ties the element of `left` comes first
fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Returns the elements of `values` in ascending order; equal elements keep their relative order
///
/// # Examples
/// ```
/// use algo_classics::sort::merge_sort;
///
/// assert_eq!(merge_sort(&[38, 27, 43, 3, 9, 82, 10]), vec![3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let (left, right) = values.split_at(values.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Same as [`merge_sort`] but merges runs of doubling width bottom-up
pub fn merge_sort_iterative<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut current = values.to_vec();
    let mut width = 1;

    while width < current.len() {
        let mut next = Vec::with_capacity(current.len());
        for chunk in current.chunks(2 * width) {
            let (left, right) = chunk.split_at(width.min(chunk.len()));
            next.extend(merge(left, right));
        }
        current = next;
        width *= 2;
    }
    current
}
