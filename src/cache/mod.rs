//! Cache Module
//!
//! Key/value cache that delegates recency bookkeeping and eviction to a
//! pluggable [`EvictionPolicy`](crate::policy::EvictionPolicy).

mod engine;
mod stats;


// Re-export public types
pub use engine::Cache;
pub use stats::CacheStats;
