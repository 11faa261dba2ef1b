use std::hash::Hash;

use fxhash::FxHashMap;
use tracing::trace;

use super::*;

/// Least-recently-used cache with a fixed capacity.
///
/// Entries are kept in a [`DoublyLinkedList`] ordered from most to least recently used; a hash
/// map points from each key to its list node, so `get` and `put` run in expected constant time.
///
/// # Examples
/// ```
/// use algo_classics::collections::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put(1, "one");
/// cache.put(2, "two");
/// assert_eq!(cache.get(&1), Some(&"one"));
///
/// // 2 is now the least recently used key
/// cache.put(3, "three");
/// assert_eq!(cache.get(&2), None);
/// ```
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    entries: DoublyLinkedList<(K, V)>,
    index: FxHashMap<K, usize>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Creates an empty cache holding up to `capacity` entries.
    /// Fails with [`Error::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            entries: DoublyLinkedList::new(),
            index: FxHashMap::default(),
            capacity,
        })
    }

    /// Returns the value of `key` and marks it as most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.entries.move_to_front(idx);
        self.entries.get_indexed(idx).map(|(_, v)| v)
    }

    /// Returns the value of `key` without touching its recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.entries.get_indexed(idx).map(|(_, v)| v)
    }

    /// Inserts or updates `key` and marks it as most recently used.
    /// If a new key does not fit, the least recently used entry is evicted and returned.
    pub fn put(&mut self, key: K, val: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_indexed_mut(idx) {
                entry.1 = val;
            }
            self.entries.move_to_front(idx);
            return None;
        }

        let evicted = if self.index.len() == self.capacity {
            self.evict()
        } else {
            None
        };

        let idx = self.entries.push_front_indexed((key.clone(), val));
        self.index.insert(key, idx);
        evicted
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let idx = self.entries.back_index()?;
        let (key, val) = self.entries.remove_indexed(idx)?;
        self.index.remove(&key);
        trace!(capacity = self.capacity, "evict least recently used entry");
        Some((key, val))
    }

    /// Returns *true* if `key` is cached; does not touch its recency
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of cached entries
    pub fn size(&self) -> usize {
        self.index.len()
    }

    /// Returns *true* if no entry is cached
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of cached entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over all keys from most to least recently used
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}
