/*!
# Collections

Hand-built versions of the classic containers. None of them is meant to replace its `std`
counterpart; each shows the mechanics of one data structure:
- sequences: [`ArrayList`], [`SinglyLinkedList`], [`DoublyLinkedList`],
- LIFO/FIFO: [`Stack`] ([`VecStack`], [`LinkedStack`]), [`BoundedQueue`] ([`ArrayQueue`],
  [`LinkedQueue`]) and the overwriting [`RingBuffer`],
- priority queues: [`MinHeap`], [`MaxHeap`],
- maps and caches: [`ChainedHashMap`], [`OpenAddressingMap`], [`LruCache`], [`Trie`],
- [`SuccessorList`] for Floyd's cycle detection on linked lists.

Linked structures that need back-pointers ([`DoublyLinkedList`], [`LruCache`]) store their nodes
in an arena and link them by index.

Fallible operations return [`crate::error::Result`]; absent values (popping an empty stack,
a missed lookup) are `None`.
*/

use crate::error::*;

mod array_list;
mod doubly_linked_list;
mod hash_map;
mod heap;
mod list_cycle;
mod lru;
mod queue;
mod ring_buffer;
mod singly_linked_list;
mod stack;
mod trie;

pub use array_list::*;
pub use doubly_linked_list::*;
pub use hash_map::*;
pub use heap::*;
pub use list_cycle::*;
pub use lru::*;
pub use queue::*;
pub use ring_buffer::*;
pub use singly_linked_list::*;
pub use stack::*;
pub use trie::*;
