//! The two classic collision-handling strategies over a fixed-size slot
//! array.
//!
//! Variables:
//!   m : usize  — number of slots
//!   n : usize  — number of live entries
//!   ⍺ = n / m  — load factor
//!
//! Equations:
//!   chaining:        bucket(k) = hash(k) mod m, entries appended to the
//!                    bucket's vector; expected chain length ⍺
//!   open addressing: probe(k, i) = (hash(k) + i) mod m, deleted slots
//!                    become tombstones so later probes keep walking
//!
//! Neither table resizes; these are the exercise forms, sized up front by
//! the caller.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn slot_of<K: Hash>(key: &K, m: usize) -> usize {
    let mut h = DefaultHasher::new();
    key.hash(&mut h);
    (h.finish() as usize) % m
}

/// Separate chaining: each slot holds a vector of the entries that hashed
/// to it.
pub struct ChainedHashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
}

impl<K: Hash + Eq, V> ChainedHashTable<K, V> {
    pub fn new(m: usize) -> Self {
        assert!(m > 0, "a hash table needs at least one slot");
        Self {
            buckets: (0..m).map(|_| Vec::new()).collect(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = &self.buckets[slot_of(key, self.buckets.len())];
        bucket.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn put(&mut self, key: K, val: V) {
        let m = self.buckets.len();
        let bucket = &mut self.buckets[slot_of(&key, m)];
        match bucket.iter().position(|(k, _)| *k == key) {
            Some(at) => bucket[at].1 = val,
            None => bucket.push((key, val)),
        }
    }

    /// Removes the entry under `key`, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let m = self.buckets.len();
        let bucket = &mut self.buckets[slot_of(key, m)];
        let at = bucket.iter().position(|(k, _)| k == key)?;
        Some(bucket.swap_remove(at).1)
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

// Tombstones keep probe chains intact: a search may not stop at a deleted
// slot, only at a never-used one.
enum Slot<K> {
    Empty,
    Deleted,
    Occupied(K),
}

/// Open addressing with linear probing, storing a set of keys. The table
/// holds at most `m` keys and refuses inserts once full.
pub struct OpenAddressingSet<K> {
    slots: Vec<Slot<K>>,
    live: usize,
}

impl<K: Hash + Eq> OpenAddressingSet<K> {
    pub fn new(m: usize) -> Self {
        assert!(m > 0, "a hash table needs at least one slot");
        Self {
            slots: (0..m).map(|_| Slot::Empty).collect(),
            live: 0,
        }
    }

    /// Inserts `key`, probing linearly from its home slot. Returns false
    /// when the key is already present or the table is full.
    pub fn insert(&mut self, key: K) -> bool {
        if self.live == self.slots.len() || self.contains(&key) {
            return false;
        }
        let m = self.slots.len();
        let mut i = slot_of(&key, m);
        while let Slot::Occupied(_) = self.slots[i] {
            i = (i + 1) % m;
        }
        self.slots[i] = Slot::Occupied(key);
        self.live += 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.probe(key).is_some()
    }

    /// Tombstones the key's slot. Returns false when the key is absent.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.probe(key) {
            Some(i) => {
                self.slots[i] = Slot::Deleted;
                self.live -= 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // Walks the probe sequence from the key's home slot. Stops at the key,
    // at a never-used slot, or after wrapping the whole table.
    fn probe(&self, key: &K) -> Option<usize> {
        let m = self.slots.len();
        let home = slot_of(key, m);
        let mut i = home;
        loop {
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied(k) if k == key => return Some(i),
                _ => {
                    i = (i + 1) % m;
                    if i == home {
                        return None;
                    }
                }
            }
        }
    }
}
