//! Hooks Module
//!
//! Cross-cutting behavior attached to a cache without modifying it:
//! decorators wrap the [`CacheOps`] interface, observers hear about writes.

mod decorator;
mod observer;

pub use decorator::{CacheOps, LoggingDecorator};
pub use observer::{CacheObserver, LoggingObserver};
