use std::fmt;

type Link<T> = Option<Box<ListNode<T>>>;

#[derive(Debug, Clone)]
struct ListNode<T> {
    val: T,
    next: Link<T>,
}

/// A singly linked list of owned boxes
#[derive(Debug, Clone)]
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `val`
    pub fn insert_at_beginning(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { val, next }));
        self.len += 1;
    }

    /// Appends `val`; walks the entire list
    pub fn insert_at_end(&mut self, val: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { val, next: None }));
        self.len += 1;
    }

    /// Removes the first node holding `val`; returns *true* if there was one
    pub fn delete(&mut self, val: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.val == *val => {
                    *cursor = node.next.take();
                    self.len -= 1;
                    return true;
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    /// Returns *true* if some node holds `val`
    pub fn search(&self, val: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == val)
    }

    /// Reverses the list in place by relinking its nodes
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Returns the first element
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.val)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the list holds no element
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.val)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // unlink iteratively; the default recursive drop overflows the stack on long lists
        let mut rest = self.head.take();
        while let Some(mut node) = rest {
            rest = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(val) = values.pop() {
            list.insert_at_beginning(val);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    /// Formats as `10 -> 20 -> null`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in self.iter() {
            write!(f, "{val} -> ")?;
        }
        write!(f, "null")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn display() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.to_string(), "null");

        list.insert_at_end(20);
        list.insert_at_beginning(10);
        assert_eq!(list.to_string(), "10 -> 20 -> null");
    }

    #[test]
    fn insert_search_delete() {
        let mut list = SinglyLinkedList::new();
        for val in [10, 20, 30] {
            list.insert_at_end(val);
        }
        assert_eq!(list.len(), 3);
        assert!(list.search(&20));
        assert!(!list.search(&40));

        assert!(list.delete(&20));
        assert!(!list.delete(&20));
        assert_eq!(list.to_string(), "10 -> 30 -> null");

        assert!(list.delete(&10));
        assert_eq!(list.front(), Some(&30));
        assert!(list.delete(&30));
        assert!(list.is_empty());
        assert!(!list.delete(&30));
    }

    #[test]
    fn reverse() {
        let mut list: SinglyLinkedList<u32> = (1..=5).collect();
        list.reverse();
        assert_eq!(list.iter().copied().collect_vec(), vec![5, 4, 3, 2, 1]);

        let mut empty = SinglyLinkedList::<u32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn long_list_drops() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
    }
}
