/// LIFO container
pub trait Stack<T> {
    /// Puts `val` on top
    fn push(&mut self, val: T);

    /// Removes and returns the top element
    fn pop(&mut self) -> Option<T>;

    /// Returns the top element without removing it
    fn peek(&self) -> Option<&T>;

    /// Number of elements
    fn size(&self) -> usize;

    /// Returns *true* if the stack holds no element
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Stack on a growable array; the top is the last element
#[derive(Debug, Clone)]
pub struct VecStack<T>(Vec<T>);

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> VecStack<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Stack<T> for VecStack<T> {
    fn push(&mut self, val: T) {
        self.0.push(val);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.0.last()
    }

    fn size(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug)]
struct StackNode<T> {
    val: T,
    below: Option<Box<StackNode<T>>>,
}

/// Stack on a singly linked list; the top is the head
#[derive(Debug)]
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self { top: None, len: 0 }
    }
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, val: T) {
        let below = self.top.take();
        self.top = Some(Box::new(StackNode { val, below }));
        self.len += 1;
    }

    fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        let StackNode { val, below } = *node;
        self.top = below;
        self.len -= 1;
        Some(val)
    }

    fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.val)
    }

    fn size(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod test {
    use crate::testing::test_stack;

    test_stack!(vec_stack, VecStack);
    test_stack!(linked_stack, LinkedStack);
}
