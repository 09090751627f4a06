//! Cache Factory Module
//!
//! Builds caches and policies from a [`CacheConfig`].

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, PolicyKind};
use crate::recency::{DequeStore, LinkedStore, StoreKind};

/// Creates caches with their policy fully wired at construction.
pub struct CacheFactory;

impl CacheFactory {
    /// Wraps an already-built policy in a new cache.
    pub fn create_cache<K, V>(policy: Box<dyn EvictionPolicy<K>>) -> Cache<K, V>
    where
        K: Eq + Hash + Clone + Debug,
    {
        Cache::new(policy)
    }

    // == Policy ==
    /// Builds the policy selected by `config`.
    ///
    /// Fails with `InvalidCapacity` when `config.capacity` is zero.
    pub fn create_policy<K>(config: &CacheConfig) -> Result<Box<dyn EvictionPolicy<K>>>
    where
        K: Eq + Hash + Clone + Debug + 'static,
    {
        let size = config.capacity;
        let policy: Box<dyn EvictionPolicy<K>> = match (config.policy, config.store) {
            (PolicyKind::Lru, StoreKind::Linked) => {
                Box::new(LruPolicy::new(size, LinkedStore::with_capacity(size))?)
            }
            (PolicyKind::Lru, StoreKind::Deque) => {
                Box::new(LruPolicy::new(size, DequeStore::with_capacity(size))?)
            }
            (PolicyKind::Fifo, StoreKind::Linked) => {
                Box::new(FifoPolicy::new(size, LinkedStore::with_capacity(size))?)
            }
            (PolicyKind::Fifo, StoreKind::Deque) => {
                Box::new(FifoPolicy::new(size, DequeStore::with_capacity(size))?)
            }
            (PolicyKind::Lfu, store) => {
                debug!(%store, "lfu keeps its own frequency index; store kind ignored");
                Box::new(LfuPolicy::new(size)?)
            }
        };
        Ok(policy)
    }

    // == Cache ==
    /// Builds a cache from `config`.
    pub fn from_config<K, V>(config: &CacheConfig) -> Result<Cache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + 'static,
    {
        let policy = Self::create_policy(config)?;
        info!(
            capacity = config.capacity,
            policy = %config.policy,
            store = %config.store,
            "cache created"
        );
        Ok(Self::create_cache(policy))
    }
}
