//! Recency Store Module
//!
//! Ordered key sequences that eviction policies manipulate. Keys are kept
//! oldest-first: `append` adds at the tail (most recent) and `pop_front`
//! removes from the head (least recent).

mod deque;
mod linked;

pub use deque::DequeStore;
pub use linked::LinkedStore;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Recency Store Trait ==
/// Ordered, duplicate-free sequence of keys.
///
/// Implementations must reject duplicate appends with
/// [`CacheError::DuplicateKey`](crate::error::CacheError::DuplicateKey), removal of
/// untracked keys with [`CacheError::NotFound`](crate::error::CacheError::NotFound),
/// and pops on an empty store with
/// [`CacheError::EmptyStore`](crate::error::CacheError::EmptyStore). A failed call
/// leaves the store unchanged.
pub trait RecencyStore<K> {
    /// Adds `key` at the most-recent (tail) position.
    fn append(&mut self, key: K) -> Result<()>;

    /// Removes `key` wherever it sits in the order.
    fn remove(&mut self, key: &K) -> Result<()>;

    /// Removes and returns the least-recent (head) key.
    fn pop_front(&mut self) -> Result<K>;

    /// Returns the number of tracked keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if a key is being tracked.
    fn contains(&self, key: &K) -> bool;

    /// Returns the least-recent key without removing it.
    fn peek_front(&self) -> Option<&K>;

    /// Snapshot of the tracked keys, oldest first.
    fn keys(&self) -> Vec<K>;

    /// Drops every tracked key.
    fn clear(&mut self);
}

// == Store Kind ==
/// Selects a built-in recency store by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// [`LinkedStore`], O(1) operations
    #[default]
    Linked,
    /// [`DequeStore`], O(n) remove
    Deque,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Linked => f.write_str("linked"),
            StoreKind::Deque => f.write_str("deque"),
        }
    }
}

impl FromStr for StoreKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linked" => Ok(StoreKind::Linked),
            "deque" => Ok(StoreKind::Deque),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown recency store '{}'",
                other
            ))),
        }
    }
}
