use tracing::warn;

use super::*;

/// FIFO container with a fixed capacity
pub trait BoundedQueue<T> {
    /// Adds `val` at the back.
    /// Fails with [`Error::CapacityExceeded`] if the queue is full; `val` is dropped then.
    fn enqueue(&mut self, val: T) -> Result<()>;

    /// Removes and returns the front element
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front element without removing it
    fn peek(&self) -> Option<&T>;

    /// Number of elements
    fn size(&self) -> usize;

    /// Maximum number of elements
    fn capacity(&self) -> usize;

    /// Returns *true* if the queue holds no element
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns *true* if no further element can be enqueued
    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }
}

fn overflow(capacity: usize) -> Error {
    warn!(capacity, "queue is full");
    Error::CapacityExceeded { capacity }
}

/// Bounded queue on a circular array
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue holding up to `capacity` elements.
    /// Fails with [`Error::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            len: 0,
        })
    }
}

impl<T> BoundedQueue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(overflow(self.capacity()));
        }
        let rear = (self.front + self.len) % self.slots.len();
        self.slots[rear] = Some(val);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let val = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        val
    }

    fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Bounded queue on a linked list: enqueue at the tail, dequeue at the head
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    list: DoublyLinkedList<T>,
    capacity: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue holding up to `capacity` elements.
    /// Fails with [`Error::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            list: DoublyLinkedList::new(),
            capacity,
        })
    }
}

impl<T> BoundedQueue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(overflow(self.capacity));
        }
        self.list.append(val);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    fn size(&self) -> usize {
        self.list.size()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod test {
    use crate::testing::test_bounded_queue;

    test_bounded_queue!(array_queue, ArrayQueue);
    test_bounded_queue!(linked_queue, LinkedQueue);
}
