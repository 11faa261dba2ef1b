/*!
Doubly linked list whose nodes live in an arena (`Vec`) and link to each other by index.
Freed slots are recycled, so indices of live nodes stay valid until the node is removed.
*/

#[derive(Debug, Clone)]
struct DNode<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An arena-backed doubly linked list
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Option<DNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, idx: usize) -> Option<&DNode<T>> {
        self.slots.get(idx)?.as_ref()
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut DNode<T>> {
        self.slots.get_mut(idx)?.as_mut()
    }

    fn allocate(&mut self, node: DNode<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Links the detached node `idx` in as new head
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head) => head.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Detaches node `idx` from its neighbors without freeing its slot
    fn unlink(&mut self, idx: usize) {
        let Some((prev, next)) = self.node(idx).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(n) => n.prev = prev,
            None => self.tail = prev,
        }
    }

    /// Inserts `val` at the front and returns the index of its node
    pub(crate) fn push_front_indexed(&mut self, val: T) -> usize {
        let idx = self.allocate(DNode {
            val,
            prev: None,
            next: None,
        });
        self.link_front(idx);
        self.len += 1;
        idx
    }

    /// Removes the node at `idx` and returns its value
    pub(crate) fn remove_indexed(&mut self, idx: usize) -> Option<T> {
        self.node(idx)?;
        self.unlink(idx);
        let node = self.slots[idx].take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node.val)
    }

    /// Moves the node at `idx` to the front
    pub(crate) fn move_to_front(&mut self, idx: usize) {
        if self.head != Some(idx) && self.node(idx).is_some() {
            self.unlink(idx);
            self.link_front(idx);
        }
    }

    pub(crate) fn get_indexed(&self, idx: usize) -> Option<&T> {
        self.node(idx).map(|node| &node.val)
    }

    pub(crate) fn get_indexed_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.node_mut(idx).map(|node| &mut node.val)
    }

    pub(crate) fn back_index(&self) -> Option<usize> {
        self.tail
    }

    /// Appends `val` at the back
    pub fn append(&mut self, val: T) {
        let idx = self.allocate(DNode {
            val,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|t| self.node_mut(t)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Prepends `val` at the front
    pub fn prepend(&mut self, val: T) {
        self.push_front_indexed(val);
    }

    /// Removes and returns the first element
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_indexed(self.head?)
    }

    /// Removes and returns the last element
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove_indexed(self.tail?)
    }

    /// First element
    pub fn front(&self) -> Option<&T> {
        self.get_indexed(self.head?)
    }

    /// Last element
    pub fn back(&self) -> Option<&T> {
        self.get_indexed(self.tail?)
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns *true* if the list holds no element
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.and_then(|h| self.node(h)), |node| {
            node.next.and_then(|n| self.node(n))
        })
        .map(|node| &node.val)
    }

    /// Iterates from back to front
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.tail.and_then(|t| self.node(t)), |node| {
            node.prev.and_then(|p| self.node(p))
        })
        .map(|node| &node.val)
    }

    fn position(&self, val: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(idx) = current {
            let node = self.node(idx)?;
            if node.val == *val {
                return Some(idx);
            }
            current = node.next;
        }
        None
    }

    /// Removes the first node holding `val`; returns *true* if there was one
    pub fn delete(&mut self, val: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(val)
            .and_then(|idx| self.remove_indexed(idx))
            .is_some()
    }

    /// Returns *true* if some node holds `val`
    pub fn find(&self, val: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(val).is_some()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for val in iter {
            list.append(val);
        }
        list
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::collections::VecDeque;

    #[test]
    fn append_prepend_iterate() {
        let mut list = DoublyLinkedList::new();
        list.append(2);
        list.append(3);
        list.prepend(1);

        assert_eq!(list.size(), 3);
        assert_eq!(list.iter().copied().collect_vec(), vec![1, 2, 3]);
        assert_eq!(list.iter_rev().copied().collect_vec(), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn delete_and_find() {
        let mut list: DoublyLinkedList<u32> = (1..=5).collect();
        assert!(list.find(&3));
        assert!(list.delete(&3));
        assert!(!list.find(&3));
        assert!(!list.delete(&3));

        assert!(list.delete(&1));
        assert!(list.delete(&5));
        assert_eq!(list.iter().copied().collect_vec(), vec![2, 4]);
        assert_eq!(list.iter_rev().copied().collect_vec(), vec![4, 2]);
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn pops() {
        let mut list: DoublyLinkedList<u32> = (1..=3).collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn slots_are_recycled() {
        let mut list = DoublyLinkedList::new();
        let a = list.push_front_indexed('a');
        list.push_front_indexed('b');
        assert_eq!(list.remove_indexed(a), Some('a'));
        assert_eq!(list.remove_indexed(a), None);

        let c = list.push_front_indexed('c');
        assert_eq!(c, a);
        list.move_to_front(list.back_index().unwrap());
        assert_eq!(list.iter().copied().collect_vec(), vec!['b', 'c']);
    }

    #[test]
    fn matches_vecdeque() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let mut list = DoublyLinkedList::new();
        let mut reference = VecDeque::new();

        for _ in 0..2000 {
            let val: u32 = rng.random_range(0..30);
            match rng.random_range(0..5) {
                0 => {
                    list.append(val);
                    reference.push_back(val);
                }
                1 => {
                    list.prepend(val);
                    reference.push_front(val);
                }
                2 => assert_eq!(list.pop_front(), reference.pop_front()),
                3 => assert_eq!(list.pop_back(), reference.pop_back()),
                _ => {
                    let pos = reference.iter().position(|&x| x == val);
                    assert_eq!(list.delete(&val), pos.is_some());
                    if let Some(pos) = pos {
                        reference.remove(pos);
                    }
                }
            }
            assert_eq!(list.size(), reference.len());
        }

        assert_eq!(list.iter().collect_vec(), reference.iter().collect_vec());
        assert_eq!(list.iter_rev().collect_vec(), reference.iter().rev().collect_vec());
    }
}
