//! LRU Policy Module
//!
//! Implements Least Recently Used eviction on top of a [`RecencyStore`].

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::trace;

use crate::error::Result;
use crate::policy::{validate_capacity, validate_empty_store, EvictionPolicy};
use crate::recency::{LinkedStore, RecencyStore};

// == LRU Policy ==
/// Evicts the key that was read or written least recently.
///
/// Keys live in the store oldest-first; every hit and every write moves
/// the key to the tail, and eviction pops the head.
#[derive(Debug)]
pub struct LruPolicy<K, S = LinkedStore<K>> {
    /// Maximum number of tracked keys
    size: usize,
    /// Recency order, least recent first
    store: S,
    _key: PhantomData<K>,
}

impl<K, S> LruPolicy<K, S>
where
    K: Eq + Hash + Clone + Debug,
    S: RecencyStore<K>,
{
    // == Constructor ==
    /// Creates a new LRU policy over `store`.
    ///
    /// # Arguments
    /// * `size` - Capacity bound, must be at least 1
    /// * `store` - Recency store; must be empty
    pub fn new(size: usize, store: S) -> Result<Self> {
        validate_empty_store(store.len())?;
        Ok(Self {
            size: validate_capacity(size)?,
            store,
            _key: PhantomData,
        })
    }

    /// Read access to the underlying recency store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // == Touch ==
    /// Moves a tracked key to the most-recent position.
    fn touch(&mut self, key: &K) -> Result<()> {
        self.store.remove(key)?;
        self.store.append(key.clone())
    }
}

impl<K> LruPolicy<K, LinkedStore<K>>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates an LRU policy backed by an O(1) [`LinkedStore`].
    pub fn with_capacity(size: usize) -> Result<Self> {
        Self::new(size, LinkedStore::with_capacity(size))
    }
}

impl<K, S> EvictionPolicy<K> for LruPolicy<K, S>
where
    K: Eq + Hash + Clone + Debug,
    S: RecencyStore<K>,
{
    fn name(&self) -> &'static str {
        "lru"
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

    fn notify_get(&mut self, key: &K) -> Result<()> {
        if self.store.contains(key) {
            self.touch(key)?;
        }
        Ok(())
    }

    fn notify_put(&mut self, key: &K) -> Result<Option<K>> {
        // Re-put refreshes recency without counting toward capacity
        if self.store.contains(key) {
            self.touch(key)?;
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
        let key = self.store.pop_front()?;
        trace!(?key, "lru victim selected");
        Ok(key)
    }

    fn keys(&self) -> Vec<K> {
        self.store.keys()
    }

    fn clear(&mut self) {
        self.store.clear();
    }
}
