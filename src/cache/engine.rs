//! Cache Engine Module
//!
//! Main cache combining HashMap storage with a pluggable eviction policy
//! and post-write observers.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use tracing::{debug, warn};

use crate::cache::CacheStats;
use crate::error::Result;
use crate::hooks::{CacheObserver, CacheOps};
use crate::policy::EvictionPolicy;

// == Cache ==
/// In-process key/value cache bounded by entry count.
///
/// Every operation runs to completion in order: the value map is updated
/// first, then the eviction policy, then observers. The cache is not `Sync`;
/// share it across threads only behind a single lock held for the whole
/// `get` or `put`.
pub struct Cache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Recency bookkeeping and victim selection
    policy: Box<dyn EvictionPolicy<K>>,
    /// Notified after every successful put, in registration order
    observers: Vec<Box<dyn CacheObserver<K>>>,
    stats: CacheStats,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates a cache driven by `policy`.
    ///
    /// A policy that already tracks keys is cleared first, since the cache
    /// starts with no entries for them.
    pub fn new(mut policy: Box<dyn EvictionPolicy<K>>) -> Self {
        if !policy.is_empty() {
            warn!(
                policy = policy.name(),
                tracked = policy.len(),
                "policy already tracks keys, clearing"
            );
            policy.clear();
        }
        Self {
            entries: HashMap::with_capacity(policy.capacity()),
            policy,
            observers: Vec::new(),
            stats: CacheStats::new(),
        }
    }

    /// Creates a cache from a concrete policy value.
    pub fn with_policy<P>(policy: P) -> Self
    where
        P: EvictionPolicy<K> + 'static,
    {
        Self::new(Box::new(policy))
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key replaces its value and refreshes it in the
    /// policy without changing the entry count. When a new key overflows the
    /// capacity bound, the policy's victim is dropped before observers run.
    ///
    /// If the policy fails, the previous mapping for `key` is restored and the
    /// error is returned; observers are not notified.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        let previous = self.entries.insert(key.clone(), value);

        let evicted = match self.policy.notify_put(&key) {
            Ok(evicted) => evicted,
            Err(err) => {
                match previous {
                    Some(old) => {
                        self.entries.insert(key, old);
                    }
                    None => {
                        self.entries.remove(&key);
                    }
                }
                return Err(err);
            }
        };

        if let Some(victim) = evicted {
            if self.entries.remove(&victim).is_some() {
                self.stats.record_eviction();
                debug!(key = ?victim, policy = self.policy.name(), "evicted entry");
            } else {
                warn!(
                    key = ?victim,
                    policy = self.policy.name(),
                    "policy evicted a key with no entry"
                );
            }
        }

        self.notify_observers(&key);
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` when the key is absent; the policy never sees misses.
    /// A hit refreshes the key in the policy before the value is returned.
    pub fn get(&mut self, key: &K) -> Result<Option<&V>> {
        if !self.entries.contains_key(key) {
            self.stats.record_miss();
            return Ok(None);
        }

        self.policy.notify_get(key)?;
        self.stats.record_hit();
        Ok(self.entries.get(key))
    }

    /// Looks up a value without touching recency or stats.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>> {
        if !self.entries.contains_key(key) {
            return Ok(None);
        }

        self.policy.notify_remove(key)?;
        let value = self.entries.remove(key);
        debug!(?key, "removed entry");
        Ok(value)
    }

    // == Observers ==
    /// Registers an observer for future puts.
    ///
    /// Entries already in the cache are not replayed.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: CacheObserver<K> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_observers(&mut self, key: &K) {
        for (index, observer) in self.observers.iter().enumerate() {
            if let Err(err) = observer.notify(key) {
                self.stats.record_observer_failure();
                warn!(observer = index, ?key, error = %err, "observer notification failed");
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity bound of the underlying policy.
    pub fn capacity(&self) -> usize {
        self.policy.capacity()
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Tracked keys in eviction order, next victim first.
    pub fn recency_order(&self) -> Vec<K> {
        self.policy.keys()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Drops every entry. Counters and observers are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.policy.clear();
    }
}

impl<K, V> CacheOps<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn put(&mut self, key: K, value: V) -> Result<()> {
        Cache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Result<Option<&V>> {
        Cache::get(self, key)
    }
}

impl<K, V> Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("policy", &self.policy.name())
            .field("capacity", &self.policy.capacity())
            .field("len", &self.entries.len())
            .field("observers", &self.observers.len())
            .field("stats", &self.stats)
            .finish()
    }
}
