//! Configuration Module
//!
//! Handles loading cache construction parameters from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use crate::policy::PolicyKind;
use crate::recency::StoreKind;

/// Default capacity bound, sized for the bundled walkthrough.
pub const DEFAULT_CAPACITY: usize = 3;

/// Cache construction parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy variant
    pub policy: PolicyKind,
    /// Recency store backing LRU and FIFO
    pub store: StoreKind,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `CACHE_POLICY` - `lru`, `fifo` or `lfu` (default: lru)
    /// - `CACHE_STORE` - `linked` or `deque` (default: linked)
    ///
    /// Missing or unparsable values fall back to their defaults. A capacity of
    /// zero is kept as-is and rejected when the cache is built.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            capacity: lookup("CACHE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            policy: lookup("CACHE_POLICY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.policy),
            store: lookup("CACHE_STORE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.store),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::Lru,
            store: StoreKind::Linked,
        }
    }
}
