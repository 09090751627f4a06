//! Eviction Policy Module
//!
//! Strategies the cache consults on every read and write to keep its
//! recency bookkeeping current and to choose victims when full.
//!
//! Policies never touch the cache's value map. When a put overflows the
//! capacity bound, [`EvictionPolicy::notify_put`] returns the victim key and
//! the cache drops the matching entry, so no back-reference to the cache is
//! needed and a policy is valid as soon as it is constructed.

mod fifo;
mod lfu;
mod lru;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Eviction Policy Trait ==
/// Capability set every eviction strategy implements.
///
/// The cache calls `notify_get` only on hits and `notify_put` after every
/// write. After either returns `Ok`, the policy tracks at most
/// [`capacity`](EvictionPolicy::capacity) keys.
pub trait EvictionPolicy<K> {
    /// Short identifier used in logs and stats.
    fn name(&self) -> &'static str;

    /// Maximum number of keys tracked before eviction kicks in.
    fn capacity(&self) -> usize;

    /// Number of keys currently tracked.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if `key` is tracked.
    fn contains(&self, key: &K) -> bool;

    /// Records a cache hit on `key`. Untracked keys are ignored.
    fn notify_get(&mut self, key: &K) -> Result<()>;

    /// Records a write of `key`.
    ///
    /// Returns the key evicted to make room, if any. Re-putting a tracked
    /// key never evicts.
    fn notify_put(&mut self, key: &K) -> Result<Option<K>>;

    /// Stops tracking `key` after an explicit removal from the cache.
    fn notify_remove(&mut self, key: &K) -> Result<()>;

    /// Chooses a victim, stops tracking it and returns it.
    fn evict(&mut self) -> Result<K>;

    /// Tracked keys in eviction order (next victim first).
    fn keys(&self) -> Vec<K>;

    /// Stops tracking every key.
    fn clear(&mut self);
}

/// Rejects capacity bounds below one entry.
pub(crate) fn validate_capacity(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(CacheError::InvalidCapacity(size));
    }
    Ok(size)
}

/// Rejects stores that already track keys the cache has no entries for.
pub(crate) fn validate_empty_store(len: usize) -> Result<()> {
    if len != 0 {
        return Err(CacheError::StoreNotEmpty(len));
    }
    Ok(())
}

// == Policy Kind ==
/// Selects a built-in policy by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Lru,
    Fifo,
    Lfu,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lfu => "lfu",
        };
        f.write_str(name)
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(PolicyKind::Lru),
            "fifo" => Ok(PolicyKind::Fifo),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown eviction policy '{}'",
                other
            ))),
        }
    }
}
