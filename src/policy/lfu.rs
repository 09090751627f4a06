//! LFU Policy Module
//!
//! Least Frequently Used eviction with a per-key access counter.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{CacheError, Result};
use crate::policy::{validate_capacity, EvictionPolicy};

/// Position of a key in the eviction order: (frequency, last touch).
type Rank = (u64, u64);

// == LFU Policy ==
/// Evicts the key with the fewest hits and writes.
///
/// Ties go to the key touched least recently. Both writes and hits count
/// as one use. Operations are O(log n).
#[derive(Debug)]
pub struct LfuPolicy<K> {
    size: usize,
    /// Current rank of every tracked key
    ranks: HashMap<K, Rank>,
    /// Keys ordered by rank, next victim first
    order: BTreeMap<Rank, K>,
    /// Monotonic touch counter
    tick: u64,
}

impl<K> LfuPolicy<K>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates a new LFU policy tracking at most `size` keys.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            size: validate_capacity(size)?,
            ranks: HashMap::with_capacity(size),
            order: BTreeMap::new(),
            tick: 0,
        })
    }

    /// Returns how many times `key` was written or hit since it was inserted.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.ranks.get(key).map(|(freq, _)| *freq)
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    // == Bump ==
    /// Increments the frequency of a tracked key. Returns false if untracked.
    fn bump(&mut self, key: &K) -> bool {
        let Some(&(freq, last)) = self.ranks.get(key) else {
            return false;
        };
        let rank = (freq + 1, self.next_tick());
        self.order.remove(&(freq, last));
        self.order.insert(rank, key.clone());
        self.ranks.insert(key.clone(), rank);
        true
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn capacity(&self) -> usize {
        self.size
    }

    fn len(&self) -> usize {
        self.ranks.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.ranks.contains_key(key)
    }

    fn notify_get(&mut self, key: &K) -> Result<()> {
        self.bump(key);
        Ok(())
    }

    fn notify_put(&mut self, key: &K) -> Result<Option<K>> {
        if self.bump(key) {
            return Ok(None);
        }

        let evicted = if self.ranks.len() >= self.size {
            Some(self.evict()?)
        } else {
            None
        };

        let rank = (1, self.next_tick());
        self.order.insert(rank, key.clone());
        self.ranks.insert(key.clone(), rank);
        Ok(evicted)
    }

    fn notify_remove(&mut self, key: &K) -> Result<()> {
        let rank = self
            .ranks
            .remove(key)
            .ok_or_else(|| CacheError::not_found(key))?;
        self.order.remove(&rank);
        Ok(())
    }

    fn evict(&mut self) -> Result<K> {
        let (_, key) = self.order.pop_first().ok_or(CacheError::EmptyStore)?;
        self.ranks.remove(&key);
        Ok(key)
    }

    fn keys(&self) -> Vec<K> {
        self.order.values().cloned().collect()
    }

    fn clear(&mut self) {
        self.ranks.clear();
        self.order.clear();
    }
}
