//! Error types for the cache core
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for recency stores, eviction policies and the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is already tracked by the recency store
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Key is not tracked by the recency store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Pop or evict on an empty store
    #[error("Store is empty")]
    EmptyStore,

    /// Capacity bound must be at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy built over a store that already tracks keys
    #[error("Store already tracks {0} keys (must start empty)")]
    StoreNotEmpty(usize),

    /// Unrecognized configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    /// Builds a `DuplicateKey` error from any debuggable key.
    pub fn duplicate<K: std::fmt::Debug>(key: &K) -> Self {
        CacheError::DuplicateKey(format!("{:?}", key))
    }

    /// Builds a `NotFound` error from any debuggable key.
    pub fn not_found<K: std::fmt::Debug>(key: &K) -> Self {
        CacheError::NotFound(format!("{:?}", key))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache core.
pub type Result<T> = std::result::Result<T, CacheError>;
