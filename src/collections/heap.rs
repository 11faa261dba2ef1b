/*!
Binary heaps stored as implicit trees in a `Vec`: the children of index `i` are `2i + 1` and
`2i + 2`. Both heaps share the sift operations, parametrized by `above(a, b)` which is *true*
if `a` has to be closer to the root than `b`.
*/

use tracing::trace;

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn sift_up<T>(data: &mut [T], mut i: usize, above: impl Fn(&T, &T) -> bool) {
    while i > 0 && above(&data[i], &data[parent(i)]) {
        data.swap(i, parent(i));
        i = parent(i);
    }
}

fn sift_up_recursive<T>(data: &mut [T], i: usize, above: &impl Fn(&T, &T) -> bool) {
    if i > 0 && above(&data[i], &data[parent(i)]) {
        data.swap(i, parent(i));
        sift_up_recursive(data, parent(i), above);
    }
}

/// Returns the child of `i` that belongs above the other, if it also belongs above `i`
fn promoted_child<T>(data: &[T], i: usize, above: impl Fn(&T, &T) -> bool) -> Option<usize> {
    let mut top = i;
    for child in [2 * i + 1, 2 * i + 2] {
        if child < data.len() && above(&data[child], &data[top]) {
            top = child;
        }
    }
    (top != i).then_some(top)
}

fn sift_down<T>(data: &mut [T], mut i: usize, above: impl Fn(&T, &T) -> bool) {
    while let Some(child) = promoted_child(data, i, &above) {
        data.swap(i, child);
        i = child;
    }
}

fn sift_down_recursive<T>(data: &mut [T], i: usize, above: &impl Fn(&T, &T) -> bool) {
    if let Some(child) = promoted_child(data, i, above) {
        data.swap(i, child);
        sift_down_recursive(data, child, above);
    }
}

fn min_above<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

fn max_above<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Min-priority queue on a binary heap
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
    recursive: bool,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            recursive: false,
        }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap using iterative sift operations
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the recursive (*true*) or iterative (*false*) sift operations
    pub fn set_recursive(&mut self, recursive: bool) {
        self.recursive = recursive;
    }

    /// Selects the recursive (*true*) or iterative (*false*) sift operations
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.set_recursive(recursive);
        self
    }

    /// Adds `val`
    pub fn insert(&mut self, val: T) {
        self.data.push(val);
        let last = self.data.len() - 1;
        if self.recursive {
            sift_up_recursive(&mut self.data, last, &min_above);
        } else {
            sift_up(&mut self.data, last, min_above);
        }
    }

    /// Removes and returns the smallest element
    pub fn extract_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        if self.recursive {
            sift_down_recursive(&mut self.data, 0, &min_above);
        } else {
            sift_down(&mut self.data, 0, min_above);
        }
        trace!(size = self.data.len(), "extract min");
        Some(min)
    }

    /// Returns the smallest element
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns *true* if the heap holds no element
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Max-priority queue on a binary heap
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a heap from arbitrary values in linear time by sifting down all inner nodes
    pub fn from_vec(mut data: Vec<T>) -> Self {
        for i in (0..data.len() / 2).rev() {
            sift_down(&mut data, i, max_above);
        }
        Self { data }
    }

    /// Adds `val`
    pub fn insert(&mut self, val: T) {
        self.data.push(val);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last, max_above);
    }

    /// Removes and returns the largest element
    pub fn extract_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let max = self.data.swap_remove(0);
        sift_down(&mut self.data, 0, max_above);
        Some(max)
    }

    /// Returns the largest element
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns *true* if the heap holds no element
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.data.len()).rev() {
            self.data.swap(0, end);
            sift_down(&mut self.data[..end], 0, max_above);
        }
        self.data
    }
}

/// Sorts `values` ascending with a max-heap: heapify, then repeatedly move the maximum behind
/// the shrinking heap
///
/// # Examples
/// ```
/// use algo_classics::collections::heap_sort;
///
/// let mut values = vec![5, -1, 3, 3, 0];
/// heap_sort(&mut values);
/// assert_eq!(values, vec![-1, 0, 3, 3, 5]);
/// ```
pub fn heap_sort<T: Ord>(values: &mut [T]) {
    for i in (0..values.len() / 2).rev() {
        sift_down(values, i, max_above);
    }
    for end in (1..values.len()).rev() {
        values.swap(0, end);
        sift_down(&mut values[..end], 0, max_above);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::test_sort;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::{cmp::Reverse, collections::BinaryHeap};

    #[test]
    fn min_heap_order() {
        for recursive in [false, true] {
            let mut heap = MinHeap::new().recursive(recursive);
            for val in [5, 3, 8, 1, 9, 2] {
                heap.insert(val);
            }
            assert_eq!(heap.peek(), Some(&1));
            assert_eq!(heap.size(), 6);

            let drained: Vec<i32> = std::iter::from_fn(|| heap.extract_min()).collect();
            assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
            assert!(heap.is_empty());
            assert_eq!(heap.extract_min(), None);
        }
    }

    #[test]
    fn max_heap_from_vec() {
        let mut heap = MaxHeap::from_vec(vec![3, 1, 6, 5, 2, 4]);
        assert_eq!(heap.peek(), Some(&6));
        heap.insert(7);
        assert_eq!(heap.extract_max(), Some(7));
        assert_eq!(heap.extract_max(), Some(6));
        assert_eq!(heap.size(), 5);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(MaxHeap::<u8>::new().extract_max(), None);
    }

    #[test]
    fn heaps_match_binary_heap() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut min_heap = MinHeap::new();
        let mut min_heap_rec = MinHeap::new().recursive(true);
        let mut max_heap = MaxHeap::new();
        let mut min_ref = BinaryHeap::new();
        let mut max_ref = BinaryHeap::new();

        for _ in 0..3000 {
            if rng.random_bool(0.6) {
                let val: i32 = rng.random_range(-100..100);
                min_heap.insert(val);
                min_heap_rec.insert(val);
                max_heap.insert(val);
                min_ref.push(Reverse(val));
                max_ref.push(val);
            } else {
                let expected = min_ref.pop().map(|Reverse(v)| v);
                assert_eq!(min_heap.extract_min(), expected);
                assert_eq!(min_heap_rec.extract_min(), expected);
                assert_eq!(max_heap.extract_max(), max_ref.pop());
            }
            assert_eq!(min_heap.peek(), min_ref.peek().map(|Reverse(v)| v));
            assert_eq!(max_heap.peek(), max_ref.peek());
        }
    }

    test_sort!(heap_sort_suite, |mut values: Vec<i64>| {
        heap_sort(&mut values);
        values
    });
}
