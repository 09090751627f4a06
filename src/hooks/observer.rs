//! Observer Module
//!
//! Callbacks run by the cache after each successful put.

use std::fmt::Debug;

use tracing::info;

// == Cache Observer Trait ==
/// Receives the key of every successful put.
///
/// Observers get the key only, never a handle to the cache, so they cannot
/// re-enter `put` or `get` while a notification is in flight. A returned
/// error is logged and counted by the cache; it neither fails the put nor
/// stops delivery to later observers.
pub trait CacheObserver<K> {
    fn notify(&self, key: &K) -> anyhow::Result<()>;
}

impl<K, F> CacheObserver<K> for F
where
    F: Fn(&K) -> anyhow::Result<()>,
{
    fn notify(&self, key: &K) -> anyhow::Result<()> {
        self(key)
    }
}

// == Logging Observer ==
/// Logs every change at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl<K: Debug> CacheObserver<K> for LoggingObserver {
    fn notify(&self, key: &K) -> anyhow::Result<()> {
        info!(?key, "cache changed");
        Ok(())
    }
}
