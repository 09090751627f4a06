//! Deque Store Module
//!
//! Simple `VecDeque`-backed recency store.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::error::{CacheError, Result};
use crate::recency::RecencyStore;

// == Deque Store ==
/// Tracks key order in a VecDeque where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// `remove` and duplicate detection scan the deque, so they are O(n). Prefer
/// [`LinkedStore`](crate::recency::LinkedStore) for anything but small caches.
#[derive(Debug, Default)]
pub struct DequeStore<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K> DequeStore<K> {
    // == Constructor ==
    /// Creates a new empty deque store.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Creates an empty store with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }
}

impl<K> RecencyStore<K> for DequeStore<K>
where
    K: Eq + Clone + Debug,
{
    fn append(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            return Err(CacheError::duplicate(&key));
        }
        self.order.push_back(key);
        Ok(())
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        let position = self
            .order
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| CacheError::not_found(key))?;
        self.order.remove(position);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<K> {
        self.order.pop_front().ok_or(CacheError::EmptyStore)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }

    fn peek_front(&self) -> Option<&K> {
        self.order.front()
    }

    fn keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}
