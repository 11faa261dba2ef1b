use tracing::debug;

use super::*;

#[derive(Debug, Clone)]
struct Successor<T> {
    val: T,
    next: Option<usize>,
}

/// Singly linked list in an arena whose `next` links are free to point backwards, so the list
/// may end in a cycle. The head is the first pushed node.
#[derive(Debug, Clone)]
pub struct SuccessorList<T> {
    nodes: Vec<Successor<T>>,
}

impl<T> Default for SuccessorList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> SuccessorList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the chain `values[0] -> values[1] -> ...` and, if `cycle_to` is given, links the
    /// last node back to node `cycle_to`.
    /// Fails with [`Error::IndexOutOfBounds`] if `cycle_to` is no node.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::collections::SuccessorList;
    ///
    /// // 1 -> 2 -> 3 -> 4 -> 2
    /// let list = SuccessorList::from_chain([1, 2, 3, 4], Some(1)).unwrap();
    /// assert!(list.has_cycle());
    /// assert_eq!(list.cycle_start(), Some(1));
    /// ```
    pub fn from_chain(values: impl IntoIterator<Item = T>, cycle_to: Option<usize>) -> Result<Self> {
        let mut list = Self::new();
        let mut last = None;
        for val in values {
            let idx = list.push(val);
            if let Some(prev) = last {
                list.link(prev, idx)?;
            }
            last = Some(idx);
        }

        if let (Some(to), Some(from)) = (cycle_to, last) {
            list.link(from, to)?;
        } else if let Some(index) = cycle_to {
            return Err(Error::IndexOutOfBounds { index, len: 0 });
        }
        Ok(list)
    }

    /// Adds an unlinked node and returns its index
    pub fn push(&mut self, val: T) -> usize {
        self.nodes.push(Successor { val, next: None });
        self.nodes.len() - 1
    }

    /// Sets the successor of node `from` to node `to`.
    /// Fails with [`Error::IndexOutOfBounds`] if either index is no node.
    pub fn link(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.nodes.len();
        for index in [from, to] {
            if index >= len {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }
        self.nodes[from].next = Some(to);
        Ok(())
    }

    /// Returns the value of node `idx`
    pub fn value(&self, idx: usize) -> Option<&T> {
        self.nodes.get(idx).map(|node| &node.val)
    }

    /// Returns the successor of node `idx`
    pub fn next_of(&self, idx: usize) -> Option<usize> {
        self.nodes.get(idx)?.next
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if the list has no node
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn head(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }

    /// Runs the tortoise (one step) and the hare (two steps) from the head and returns the node
    /// where they meet, or `None` if the hare falls off the end
    fn meeting_point(&self) -> Option<usize> {
        let mut slow = self.head()?;
        let mut fast = slow;
        loop {
            fast = self.next_of(self.next_of(fast)?)?;
            slow = self.next_of(slow)?;
            if slow == fast {
                return Some(slow);
            }
        }
    }

    /// Returns *true* if following `next` from the head never ends
    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Returns the first node of the cycle reachable from the head
    pub fn cycle_start(&self) -> Option<usize> {
        let mut fast = self.meeting_point()?;
        let mut slow = self.head()?;
        while slow != fast {
            slow = self.next_of(slow)?;
            fast = self.next_of(fast)?;
        }
        debug!(start = slow, "found cycle entry");
        Some(slow)
    }
}
