use tracing::trace;

use super::*;

const DEFAULT_CAPACITY: usize = 4;

/// A growable array that manages its capacity explicitly: when full, the storage is replaced
/// by one of twice the size and all elements are moved over.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list with a capacity of 4
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list that can hold `capacity` elements before growing.
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::allocate(capacity.max(1)),
            len: 0,
        }
    }

    fn allocate(capacity: usize) -> Vec<Option<T>> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    fn grow(&mut self) {
        let capacity = self.slots.len() * 2;
        trace!(from = self.slots.len(), to = capacity, "grow array list");

        let mut slots = Self::allocate(capacity);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }

    /// Appends `val` at the end
    pub fn add(&mut self, val: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(val);
        self.len += 1;
    }

    /// Returns the element at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Replaces the element at `index` and returns the previous one
    pub fn set(&mut self, index: usize, val: T) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.slots[index]
            .replace(val)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    /// Removes the element at `index`, shifting all later elements one to the left.
    /// Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let removed = self.slots[index].take();
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        removed
    }

    /// Number of stored elements
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns *true* if the list holds no element
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements that fit before the storage grows
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for val in iter {
            list.add(val);
        }
        list
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn add_and_get() {
        let mut list = ArrayList::new();
        list.add(1);
        list.add(2);
        list.add(3);

        assert_eq!(list.size(), 3);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(1), Some(&2));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn remove_shifts_left() {
        let mut list: ArrayList<&str> = ["apple", "banana", "orange"].into_iter().collect();
        assert_eq!(list.remove(1), Some("banana"));
        assert_eq!(list.size(), 2);
        assert_eq!(list.get(0), Some(&"apple"));
        assert_eq!(list.get(1), Some(&"orange"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list: ArrayList<u32> = ArrayList::new();
        assert_eq!(list.remove(0), None);
        assert_eq!(list.size(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_first_and_last() {
        let mut list: ArrayList<u32> = (1..=3).collect();
        assert_eq!(list.remove(0), Some(1));
        assert_eq!(list.iter().copied().collect_vec(), vec![2, 3]);
        assert_eq!(list.remove(1), Some(3));
        assert_eq!(list.iter().copied().collect_vec(), vec![2]);
    }

    #[test]
    fn capacity_doubles() {
        let mut list = ArrayList::with_capacity(2);
        assert_eq!(list.capacity(), 2);
        for i in 0..5 {
            list.add(i);
        }
        assert_eq!(list.capacity(), 8);
        assert_eq!(list.iter().copied().collect_vec(), (0..5).collect_vec());
        assert_eq!(ArrayList::<u8>::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn set_in_and_out_of_range() {
        let mut list: ArrayList<u32> = (1..=3).collect();
        assert_eq!(list.set(1, 20), Ok(2));
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(
            list.set(3, 4),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }
}
