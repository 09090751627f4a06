//! FIFO Policy Module
//!
//! Evicts in insertion order; reads do not affect the order.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::Result;
use crate::policy::{validate_capacity, validate_empty_store, EvictionPolicy};
use crate::recency::{LinkedStore, RecencyStore};

// == FIFO Policy ==
/// First-in, first-out eviction over a [`RecencyStore`].
#[derive(Debug)]
pub struct FifoPolicy<K, S = LinkedStore<K>> {
    size: usize,
    /// Insertion order, oldest first
    store: S,
    _key: PhantomData<K>,
}

impl<K, S> FifoPolicy<K, S>
where
    K: Eq + Hash + Clone + Debug,
    S: RecencyStore<K>,
{
    /// Creates a new FIFO policy over `store`, which must be empty.
    pub fn new(size: usize, store: S) -> Result<Self> {
        validate_empty_store(store.len())?;
        Ok(Self {
            size: validate_capacity(size)?,
            store,
            _key: PhantomData,
        })
    }
}

impl<K> FifoPolicy<K, LinkedStore<K>>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn with_capacity(size: usize) -> Result<Self> {
        Self::new(size, LinkedStore::with_capacity(size))
    }
}

impl<K, S> EvictionPolicy<K> for FifoPolicy<K, S>
where
    K: Eq + Hash + Clone + Debug,
    S: RecencyStore<K>,
{
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn capacity(&self) -> usize {
        self.size
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn notify_get(&mut self, _key: &K) -> Result<()> {
        Ok(())
    }

    fn notify_put(&mut self, key: &K) -> Result<Option<K>> {
        // Overwrites keep their original insertion slot
        if self.store.contains(key) {
            return Ok(None);
        }

        let evicted = if self.store.len() >= self.size {
            Some(self.evict()?)
        } else {
            None
        };

        self.store.append(key.clone())?;
        Ok(evicted)
    }

    fn notify_remove(&mut self, key: &K) -> Result<()> {
        self.store.remove(key)
    }

    fn evict(&mut self) -> Result<K> {
        self.store.pop_front()
    }

    fn keys(&self) -> Vec<K> {
        self.store.keys()
    }

    fn clear(&mut self) {
        self.store.clear();
    }
}
