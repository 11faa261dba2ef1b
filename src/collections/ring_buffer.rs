use tracing::trace;

use super::*;

/// Fixed-size circular buffer. Enqueueing into a full buffer overwrites the oldest element.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    /// next slot to write
    head: usize,
    /// oldest element
    tail: usize,
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer for `capacity` elements.
    /// Fails with [`Error::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Adds `val`. If the buffer is full, the oldest element is dropped and returned.
    pub fn enqueue(&mut self, val: T) -> Option<T> {
        let overwritten = self.slots[self.head].replace(val);
        self.head = (self.head + 1) % self.slots.len();

        if self.is_full() {
            trace!(slot = self.tail, "overwrite oldest element");
            self.tail = (self.tail + 1) % self.slots.len();
            overwritten
        } else {
            self.count += 1;
            None
        }
    }

    /// Removes and returns the oldest element
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let val = self.slots[self.tail].take();
        self.tail = (self.tail + 1) % self.slots.len();
        self.count -= 1;
        val
    }

    /// Returns *true* if the buffer holds no element
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns *true* if the next enqueue overwrites an element
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Number of stored elements
    pub fn count(&self) -> usize {
        self.count
    }

    /// Maximum number of stored elements
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
