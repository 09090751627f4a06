//! Decorator Module
//!
//! The `put`/`get` contract shared by caches and the decorators that wrap them.

use std::fmt::Debug;

use tracing::{debug, info};

use crate::error::Result;

// == Cache Ops Trait ==
/// Read/write interface implemented by [`Cache`](crate::cache::Cache) and by
/// every decorator.
///
/// A decorator may run code before and after delegating, but must forward
/// each call to the wrapped link exactly once.
pub trait CacheOps<K, V> {
    /// Stores a key-value pair.
    fn put(&mut self, key: K, value: V) -> Result<()>;

    /// Retrieves a value, `Ok(None)` when the key is absent.
    fn get(&mut self, key: &K) -> Result<Option<&V>>;
}

/// Lets a decorator borrow the link it wraps instead of owning it.
impl<K, V, C> CacheOps<K, V> for &mut C
where
    C: CacheOps<K, V> + ?Sized,
{
    fn put(&mut self, key: K, value: V) -> Result<()> {
        (**self).put(key, value)
    }

    fn get(&mut self, key: &K) -> Result<Option<&V>> {
        (**self).get(key)
    }
}

// == Logging Decorator ==
/// Logs every put before forwarding it and every lookup result after.
#[derive(Debug)]
pub struct LoggingDecorator<C> {
    inner: C,
}

impl<C> LoggingDecorator<C> {
    /// Wraps `inner`, which may be a cache, `&mut` cache or another decorator.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<K, V, C> CacheOps<K, V> for LoggingDecorator<C>
where
    K: Debug,
    V: Debug,
    C: CacheOps<K, V>,
{
    fn put(&mut self, key: K, value: V) -> Result<()> {
        info!(?key, ?value, "putting entry");
        self.inner.put(key, value)
    }

    fn get(&mut self, key: &K) -> Result<Option<&V>> {
        let value = self.inner.get(key)?;
        debug!(?key, hit = value.is_some(), "looked up entry");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use crate::policy::LruPolicy;

    fn cache(size: usize) -> Cache<&'static str, i32> {
        Cache::with_policy(LruPolicy::with_capacity(size).unwrap())
    }

    #[test]
    fn test_logging_decorator_forwards_put_and_get() {
        let mut decorated = LoggingDecorator::new(cache(2));

        decorated.put("a", 1).unwrap();
        assert_eq!(decorated.get(&"a").unwrap(), Some(&1));
        assert_eq!(decorated.get(&"b").unwrap(), None);

        let inner = decorated.into_inner();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner.stats().hits, 1);
        assert_eq!(inner.stats().misses, 1);
    }

    #[test]
    fn test_logging_decorator_over_borrowed_cache() {
        let mut cache = cache(1);
        {
            let mut decorated = LoggingDecorator::new(&mut cache);
            decorated.put("a", 1).unwrap();
            decorated.put("b", 2).unwrap();
            assert_eq!(decorated.inner().len(), 1);
        }

        assert_eq!(cache.peek(&"a"), None);
        assert_eq!(cache.peek(&"b"), Some(&2));
    }

    #[test]
    fn test_decorators_stack() {
        let mut stacked = LoggingDecorator::new(LoggingDecorator::new(cache(3)));

        stacked.put("x", 7).unwrap();
        assert_eq!(stacked.get(&"x").unwrap(), Some(&7));
        assert_eq!(stacked.inner_mut().inner_mut().len(), 1);
    }
}
