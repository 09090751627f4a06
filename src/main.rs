//! Policy Cache walkthrough
//!
//! Builds a cache from environment configuration, wraps it in a logging
//! decorator with a logging observer attached, and replays a short
//! put/get sequence that forces one eviction.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::{Cache, CacheConfig, CacheFactory, CacheOps, LoggingDecorator, LoggingObserver};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting policy cache walkthrough");

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}, store={}",
        config.capacity, config.policy, config.store
    );

    let mut cache: Cache<String, i64> =
        CacheFactory::from_config(&config).context("failed to build cache")?;
    cache.add_observer(LoggingObserver);

    {
        let mut decorated = LoggingDecorator::new(&mut cache);

        for (key, value) in [("A", 1), ("B", 2), ("C", 3)] {
            decorated.put(key.to_string(), value)?;
        }

        let a = decorated.get(&"A".to_string())?.copied();
        info!("get A -> {:?}", a);

        decorated.put("D".to_string(), 4)?;

        for key in ["B", "A", "C", "D"] {
            let value = decorated.get(&key.to_string())?.copied();
            info!("get {} -> {:?}", key, value);
        }
    }

    info!("Recency order (next victim first): {:?}", cache.recency_order());

    let stats = serde_json::to_string_pretty(&cache.stats()).context("failed to render stats")?;
    println!("{}", stats);

    Ok(())
}
