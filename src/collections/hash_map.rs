/*!
Two hash map designs on top of any [`BuildHasher`] (default: [`FxBuildHasher`]):
- [`ChainedHashMap`]: separate chaining, a list of entries per bucket; never resizes,
- [`OpenAddressingMap`]: linear probing in a single slot array. Removed entries leave a
  tombstone so that probe sequences stay intact. The table doubles once occupied slots and
  tombstones exceed the maximum load factor.
*/

use std::{
    hash::{BuildHasher, Hash},
    mem,
};

use fxhash::FxBuildHasher;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 16;
const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

fn bucket_of<K: Hash, S: BuildHasher>(hasher: &S, key: &K, buckets: usize) -> usize {
    (hasher.hash_one(key) % buckets as u64) as usize
}

/// Hash map with separate chaining
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V, S = FxBuildHasher> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Creates an empty map with 16 buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    /// Creates an empty map with `capacity` buckets (at least one) using `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: (0..capacity.max(1)).map(|_| Vec::new()).collect(),
            len: 0,
            hasher,
        }
    }

    fn bucket(&self, key: &K) -> usize {
        bucket_of(&self.hasher, key, self.buckets.len())
    }

    /// Inserts or updates `key`; returns the previous value
    pub fn put(&mut self, key: K, val: V) -> Option<V> {
        let b = self.bucket(&key);
        let bucket = &mut self.buckets[b];

        if let Some((_, old)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(mem::replace(old, val));
        }

        bucket.push((key, val));
        self.len += 1;
        None
    }

    /// Returns the value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket(key)]
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Removes `key` and returns its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let b = self.bucket(key);
        let bucket = &mut self.buckets[b];
        let pos = bucket.iter().position(|(k, _)| k == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(pos).1)
    }

    /// Returns *true* if `key` is stored
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored entries
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns *true* if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates over all keys in bucket order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.buckets.iter().flatten().map(|(k, _)| k)
    }
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied(K, V),
}

/// Hash map with open addressing and linear probing
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<K, V, S = FxBuildHasher> {
    slots: Vec<Slot<K, V>>,
    len: usize,
    tombstones: usize,
    max_load_factor: f64,
    hasher: S,
}

impl<K: Hash + Eq, V> Default for OpenAddressingMap<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K: Hash + Eq, V> OpenAddressingMap<K, V> {
    /// Creates an empty map with 16 slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with `capacity` slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> OpenAddressingMap<K, V, S> {
    /// Creates an empty map with `capacity` slots (at least one) using `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: Self::empty_slots(capacity.max(1)),
            len: 0,
            tombstones: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher,
        }
    }

    fn empty_slots(capacity: usize) -> Vec<Slot<K, V>> {
        (0..capacity).map(|_| Slot::Empty).collect()
    }

    /// Sets the fraction of used slots (entries and tombstones) beyond which the table doubles
    /// ** Panics if `factor` is not in `(0, 1)` **
    pub fn set_max_load_factor(&mut self, factor: f64) {
        assert!(factor > 0.0 && factor < 1.0);
        self.max_load_factor = factor;
    }

    /// Sets the fraction of used slots (entries and tombstones) beyond which the table doubles
    /// ** Panics if `factor` is not in `(0, 1)` **
    pub fn max_load_factor(mut self, factor: f64) -> Self {
        self.set_max_load_factor(factor);
        self
    }

    /// Returns the slot holding `key`
    fn find(&self, key: &K) -> Option<usize> {
        let cap = self.slots.len();
        let start = bucket_of(&self.hasher, key, cap);

        for i in (0..cap).map(|offset| (start + offset) % cap) {
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied(k, _) if k == key => return Some(i),
                _ => {}
            }
        }
        None
    }

    fn resize(&mut self, capacity: usize) {
        trace!(from = self.slots.len(), to = capacity, "resize open addressing map");
        let old = mem::replace(&mut self.slots, Self::empty_slots(capacity));
        self.len = 0;
        self.tombstones = 0;

        for slot in old {
            if let Slot::Occupied(k, v) = slot {
                self.put(k, v);
            }
        }
    }

    /// Inserts or updates `key`; returns the previous value
    pub fn put(&mut self, key: K, val: V) -> Option<V> {
        if let Some(i) = self.find(&key) {
            if let Slot::Occupied(_, old) = &mut self.slots[i] {
                return Some(mem::replace(old, val));
            }
        }

        let limit = self.max_load_factor * self.slots.len() as f64;
        if (self.len + self.tombstones + 1) as f64 > limit {
            // tombstones alone are cleared by rehashing in place
            let capacity = if (self.len + 1) as f64 > limit {
                self.slots.len() * 2
            } else {
                self.slots.len()
            };
            self.resize(capacity);
        }

        let cap = self.slots.len();
        let start = bucket_of(&self.hasher, &key, cap);
        let target = (0..cap)
            .map(|offset| (start + offset) % cap)
            .find(|&i| !matches!(self.slots[i], Slot::Occupied(..)));

        match target {
            Some(i) => {
                if matches!(self.slots[i], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.slots[i] = Slot::Occupied(key, val);
                self.len += 1;
            }
            None => {
                // only reachable with a load factor that lets the table fill up completely
                self.resize(cap * 2);
                return self.put(key, val);
            }
        }
        None
    }

    /// Returns the value stored for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.slots[self.find(key)?] {
            Slot::Occupied(_, v) => Some(v),
            _ => None,
        }
    }

    /// Removes `key` and returns its value; its slot becomes a tombstone
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.find(key)?;
        match mem::replace(&mut self.slots[i], Slot::Tombstone) {
            Slot::Occupied(_, v) => {
                self.len -= 1;
                self.tombstones += 1;
                Some(v)
            }
            other => {
                self.slots[i] = other;
                None
            }
        }
    }

    /// Returns *true* if `key` is stored
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of stored entries
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns *true* if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over all keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(k, _) => Some(k),
            _ => None,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::collections::HashMap;

    macro_rules! test_hash_map {
        ($env:ident, $map:ident) => {
            mod $env {
                use super::*;

                #[test]
                fn insert_and_retrieve() {
                    let mut map = $map::with_capacity(16);
                    assert_eq!(map.put("key1", "value1"), None);
                    assert_eq!(map.put("key2", "value2"), None);
                    assert_eq!(map.get(&"key1"), Some(&"value1"));
                    assert_eq!(map.get(&"key2"), Some(&"value2"));
                    assert_eq!(map.get(&"nonExistentKey"), None);
                }

                #[test]
                fn update_existing_key() {
                    let mut map = $map::with_capacity(16);
                    map.put("key1", 1);
                    assert_eq!(map.put("key1", 2), Some(1));
                    assert_eq!(map.get(&"key1"), Some(&2));
                    assert_eq!(map.size(), 1);
                }

                #[test]
                fn remove_and_size() {
                    let mut map = $map::with_capacity(16);
                    assert!(map.is_empty());
                    map.put("key1", 1);
                    map.put("key2", 2);
                    assert_eq!(map.size(), 2);
                    assert!(!map.is_empty());

                    assert_eq!(map.remove(&"key1"), Some(1));
                    assert_eq!(map.remove(&"key1"), None);
                    assert_eq!(map.get(&"key1"), None);
                    assert!(!map.contains_key(&"key1"));
                    assert!(map.contains_key(&"key2"));
                    assert_eq!(map.size(), 1);
                }

                #[test]
                fn more_keys_than_capacity() {
                    let mut map = $map::with_capacity(16);
                    for i in 0..200u32 {
                        map.put(i, i * i);
                    }
                    assert_eq!(map.size(), 200);
                    for i in 0..200u32 {
                        assert_eq!(map.get(&i), Some(&(i * i)));
                    }
                    assert_eq!(map.keys().copied().sorted().collect_vec(), (0..200).collect_vec());
                }

                #[test]
                fn matches_std_hash_map() {
                    let rng = &mut Pcg64Mcg::seed_from_u64(3);
                    let mut map = $map::with_capacity(4);
                    let mut reference = HashMap::new();

                    for _ in 0..5000 {
                        let key: u16 = rng.random_range(0..100);
                        match rng.random_range(0..3) {
                            0 | 1 => assert_eq!(map.put(key, key as u32), reference.insert(key, key as u32)),
                            _ => assert_eq!(map.remove(&key), reference.remove(&key)),
                        }
                        assert_eq!(map.size(), reference.len());
                        assert_eq!(map.get(&key), reference.get(&key));
                    }
                }
            }
        };
    }

    test_hash_map!(chained, ChainedHashMap);
    test_hash_map!(open_addressing, OpenAddressingMap);

    #[test]
    fn open_addressing_resizes() {
        let mut map = OpenAddressingMap::with_capacity(4).max_load_factor(0.5);
        map.put(1, 'a');
        map.put(2, 'b');
        assert_eq!(map.capacity(), 4);
        map.put(3, 'c');
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.get(&1), Some(&'a'));
    }

    #[test]
    fn tombstones_keep_probe_chains() {
        let mut map = OpenAddressingMap::with_capacity(64);
        for i in 0..40u32 {
            map.put(i, i);
        }
        for i in (0..40u32).step_by(2) {
            assert_eq!(map.remove(&i), Some(i));
        }
        for i in 0..40u32 {
            assert_eq!(map.get(&i).is_some(), i % 2 == 1);
        }
    }

    #[test]
    fn churn_does_not_grow_the_table() {
        let mut map = OpenAddressingMap::with_capacity(16);
        for i in 0..100_000u32 {
            assert_eq!(map.put(i, i), None);
            assert_eq!(map.remove(&i), Some(i));
        }
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 16);

        for i in 0..11u32 {
            map.put(i, i);
        }
        map.remove(&0);
        map.put(100, 100);
        assert_eq!(map.capacity(), 16);
        assert_eq!(map.size(), 11);
        assert!((1..11).all(|i| map.get(&i) == Some(&i)));

        map.put(101, 101);
        map.put(102, 102);
        assert_eq!(map.capacity(), 32);
        assert_eq!(map.size(), 13);
    }

    #[test]
    fn chained_keeps_bucket_count() {
        let mut map = ChainedHashMap::with_capacity(2);
        for i in 0..50 {
            map.put(i, ());
        }
        assert_eq!(map.capacity(), 2);
        assert_eq!(map.size(), 50);
    }
}
