//! Policy Cache - An in-process key/value cache with pluggable eviction
//!
//! Provides a bounded cache whose eviction decisions come from an
//! [`EvictionPolicy`] backed by a [`RecencyStore`], with decorators and
//! observers attached from the outside.

pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod hooks;
pub mod policy;
pub mod recency;

pub use cache::{Cache, CacheStats};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use factory::CacheFactory;
pub use hooks::{CacheObserver, CacheOps, LoggingDecorator, LoggingObserver};
pub use policy::{EvictionPolicy, FifoPolicy, LfuPolicy, LruPolicy, PolicyKind};
pub use recency::{DequeStore, LinkedStore, RecencyStore, StoreKind};
