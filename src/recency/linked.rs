//! Linked Store Module
//!
//! Doubly linked list of keys stored in a slot vector, plus a key index.
//!
//! ```text
//!   index: HashMap<K, usize>       slots: Vec<Option<Node<K>>>
//!   ┌─────┬──────┐                 ┌──────┬──────────────────────────────┐
//!   │ "a" │  0   │ ──────────────► │  0   │ { a, prev: None, next: 2 }   │
//!   │ "c" │  2   │ ──────────────► │  1   │ (free)                       │
//!   └─────┴──────┘                 │  2   │ { c, prev: 0, next: None }   │
//!                                  └──────┴──────────────────────────────┘
//!   head ─► [0] ◄──► [2] ◄── tail
//! ```
//!
//! `append`, `remove`, `pop_front` and `contains` are O(1) amortized.
//! Freed slots are recycled through a free list.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{CacheError, Result};
use crate::recency::RecencyStore;

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Linked Store ==
/// Recency store with O(1) append, remove and pop-front.
#[derive(Debug)]
pub struct LinkedStore<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    index: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Slot writes since the last reset, for cost checks
    #[cfg(test)]
    link_writes: usize,
}

impl<K> Default for LinkedStore<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
            #[cfg(test)]
            link_writes: 0,
        }
    }
}

impl<K> LinkedStore<K>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates a new empty linked store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
            #[cfg(test)]
            link_writes: 0,
        }
    }

    fn node(&self, id: usize) -> Option<&Node<K>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: usize) -> Option<&mut Node<K>> {
        #[cfg(test)]
        {
            self.link_writes += 1;
        }
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    fn allocate(&mut self, node: Node<K>) -> usize {
        #[cfg(test)]
        {
            self.link_writes += 1;
        }
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    // == Unlink ==
    /// Detaches the node in slot `id`, frees the slot and returns the node.
    /// The caller keeps `index` in sync.
    fn unlink(&mut self, id: usize) -> Option<Node<K>> {
        let node = self.slots.get_mut(id)?.take()?;
        #[cfg(test)]
        {
            self.link_writes += 1;
        }

        match node.prev {
            Some(prev) => {
                if let Some(p) = self.node_mut(prev) {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.node_mut(next) {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(id);
        Some(node)
    }

    /// Panics if the links, the index and the free list disagree.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.node(id).expect("linked slot must be occupied");
            assert_eq!(node.prev, prev, "broken back link at slot {}", id);
            assert_eq!(self.index.get(&node.key), Some(&id), "index out of sync");
            seen += 1;
            prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(self.tail, prev, "tail does not match last node");
        assert_eq!(seen, self.index.len(), "index holds unlinked keys");
        assert_eq!(seen + self.free.len(), self.slots.len(), "leaked slots");
    }
}

impl<K> RecencyStore<K> for LinkedStore<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn append(&mut self, key: K) -> Result<()> {
        if self.index.contains_key(&key) {
            return Err(CacheError::duplicate(&key));
        }

        let old_tail = self.tail;
        let id = self.allocate(Node {
            key: key.clone(),
            prev: old_tail,
            next: None,
        });

        match old_tail.and_then(|t| self.node_mut(t)) {
            Some(tail) => tail.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.index.insert(key, id);
        Ok(())
    }

    fn remove(&mut self, key: &K) -> Result<()> {
        let id = self
            .index
            .remove(key)
            .ok_or_else(|| CacheError::not_found(key))?;
        self.unlink(id);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<K> {
        let head = self.head.ok_or(CacheError::EmptyStore)?;
        let node = self.unlink(head).ok_or(CacheError::EmptyStore)?;
        self.index.remove(&node.key);
        Ok(node.key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn peek_front(&self) -> Option<&K> {
        self.head.and_then(|id| self.node(id)).map(|node| &node.key)
    }

    fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|id| self.node(id)) {
            keys.push(node.key.clone());
            cursor = node.next;
        }
        keys
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }
}
