//! Integration Tests for the public cache API
//!
//! Exercises the cache end to end through the crate's re-exports: eviction
//! scenarios, observers, decorators and factory-built caches.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use policy_cache::{
    Cache, CacheConfig, CacheError, CacheFactory, CacheObserver, CacheOps, DequeStore,
    LoggingDecorator, LruPolicy, PolicyKind, Result, StoreKind,
};

// == Helper Functions ==

fn lru(size: usize) -> Cache<&'static str, i32> {
    Cache::with_policy(LruPolicy::with_capacity(size).unwrap())
}

/// Observer that records every key it sees into a shared log, tagged.
struct RecordingObserver {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, &'static str)>>>,
}

impl CacheObserver<&'static str> for RecordingObserver {
    fn notify(&self, key: &&'static str) -> anyhow::Result<()> {
        self.log.borrow_mut().push((self.name, *key));
        Ok(())
    }
}

struct FailingObserver;

impl CacheObserver<&'static str> for FailingObserver {
    fn notify(&self, key: &&'static str) -> anyhow::Result<()> {
        Err(anyhow!("cannot record {}", key))
    }
}

/// Decorator that counts how often it forwards.
struct CountingDecorator<C> {
    inner: C,
    puts: u32,
    gets: u32,
}

impl<C> CountingDecorator<C> {
    fn new(inner: C) -> Self {
        Self {
            inner,
            puts: 0,
            gets: 0,
        }
    }
}

impl<C: CacheOps<&'static str, i32>> CacheOps<&'static str, i32> for CountingDecorator<C> {
    fn put(&mut self, key: &'static str, value: i32) -> Result<()> {
        self.puts += 1;
        self.inner.put(key, value)
    }

    fn get(&mut self, key: &&'static str) -> Result<Option<&i32>> {
        self.gets += 1;
        self.inner.get(key)
    }
}

// == Eviction Scenarios ==

#[test]
fn test_scenario_get_refreshes_before_overflow() {
    let mut cache = lru(3);

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();
    cache.put("C", 3).unwrap();
    assert_eq!(cache.get(&"A").unwrap(), Some(&1));

    // Order is now B, C, A so D evicts B
    cache.put("D", 4).unwrap();

    assert_eq!(cache.get(&"B").unwrap(), None);
    assert_eq!(cache.get(&"A").unwrap(), Some(&1));
    assert_eq!(cache.get(&"C").unwrap(), Some(&3));
    assert_eq!(cache.get(&"D").unwrap(), Some(&4));
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_scenario_capacity_one() {
    let mut cache = lru(1);

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();

    assert_eq!(cache.get(&"A").unwrap(), None);
    assert_eq!(cache.get(&"B").unwrap(), Some(&2));
}

#[test]
fn test_overflow_evicts_in_lru_order() {
    let mut cache = lru(3);
    for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        cache.put(key, i as i32).unwrap();
        assert!(cache.len() <= 3);
    }

    assert_eq!(cache.recency_order(), vec!["c", "d", "e"]);
    assert_eq!(cache.stats().evictions, 2);
}

#[test]
fn test_deque_store_gives_same_results() {
    let mut cache: Cache<&str, i32> =
        Cache::with_policy(LruPolicy::new(3, DequeStore::new()).unwrap());

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();
    cache.put("C", 3).unwrap();
    cache.get(&"A").unwrap();
    cache.put("D", 4).unwrap();

    assert_eq!(cache.recency_order(), vec!["C", "A", "D"]);
}

#[test]
fn test_invalid_capacity_rejected() {
    let result = LruPolicy::<&str>::with_capacity(0);
    assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
}

// == Observers ==

#[test]
fn test_observers_notified_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cache = lru(2);

    cache.add_observer(RecordingObserver {
        name: "first",
        log: Rc::clone(&log),
    });
    cache.add_observer(RecordingObserver {
        name: "second",
        log: Rc::clone(&log),
    });

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            ("first", "A"),
            ("second", "A"),
            ("first", "B"),
            ("second", "B"),
        ]
    );
}

#[test]
fn test_late_observer_gets_no_replay() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cache = lru(3);

    cache.put("A", 1).unwrap();
    cache.add_observer(RecordingObserver {
        name: "late",
        log: Rc::clone(&log),
    });
    cache.put("B", 2).unwrap();

    assert_eq!(*log.borrow(), vec![("late", "B")]);
}

#[test]
fn test_observer_not_notified_on_get() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cache = lru(3);
    cache.add_observer(RecordingObserver {
        name: "obs",
        log: Rc::clone(&log),
    });

    cache.put("A", 1).unwrap();
    cache.get(&"A").unwrap();
    cache.get(&"missing").unwrap();

    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_failing_observer_does_not_block_others() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut cache = lru(3);

    cache.add_observer(FailingObserver);
    cache.add_observer(RecordingObserver {
        name: "after",
        log: Rc::clone(&log),
    });

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();

    assert_eq!(*log.borrow(), vec![("after", "A"), ("after", "B")]);
    assert_eq!(cache.stats().observer_failures, 2);
    assert_eq!(cache.len(), 2);
}

// == Decorators ==

#[test]
fn test_decorator_forwards_exactly_once() {
    let mut counting = CountingDecorator::new(lru(2));

    counting.put("A", 1).unwrap();
    counting.put("B", 2).unwrap();
    assert_eq!(counting.get(&"A").unwrap(), Some(&1));
    assert_eq!(counting.get(&"Z").unwrap(), None);

    assert_eq!(counting.puts, 2);
    assert_eq!(counting.gets, 2);

    let stats = counting.inner.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.total_entries, 2);
}

#[test]
fn test_decorator_chain_preserves_eviction() {
    let mut cache = lru(3);
    {
        let mut chain = LoggingDecorator::new(CountingDecorator::new(&mut cache));

        chain.put("A", 1).unwrap();
        chain.put("B", 2).unwrap();
        chain.put("C", 3).unwrap();
        chain.get(&"A").unwrap();
        chain.put("D", 4).unwrap();

        assert_eq!(chain.inner().puts, 4);
    }

    assert_eq!(cache.peek(&"B"), None);
    assert_eq!(cache.recency_order(), vec!["C", "A", "D"]);
}

// == Factory and Config ==

#[test]
fn test_factory_from_config() {
    let config = CacheConfig {
        capacity: 2,
        policy: PolicyKind::Fifo,
        store: StoreKind::Deque,
    };
    let mut cache: Cache<String, u64> = CacheFactory::from_config(&config).unwrap();

    cache.put("x".to_string(), 1).unwrap();
    cache.put("y".to_string(), 2).unwrap();
    cache.get(&"x".to_string()).unwrap();
    cache.put("z".to_string(), 3).unwrap();

    // FIFO ignores the read, so x goes first
    assert!(!cache.contains(&"x".to_string()));
    assert_eq!(cache.policy_name(), "fifo");
}

#[test]
fn test_factory_default_config_is_lru() {
    let mut cache: Cache<&str, i32> = CacheFactory::from_config(&CacheConfig::default()).unwrap();

    cache.put("A", 1).unwrap();
    cache.put("B", 2).unwrap();
    cache.put("C", 3).unwrap();
    cache.get(&"A").unwrap();
    cache.put("D", 4).unwrap();

    assert_eq!(cache.get(&"B").unwrap(), None);
    assert_eq!(cache.policy_name(), "lru");
}

#[test]
fn test_factory_lfu() {
    let config = CacheConfig {
        capacity: 2,
        policy: PolicyKind::Lfu,
        store: StoreKind::Linked,
    };
    let mut cache: Cache<&str, i32> = CacheFactory::from_config(&config).unwrap();

    cache.put("hot", 1).unwrap();
    cache.put("cold", 2).unwrap();
    cache.get(&"hot").unwrap();
    cache.get(&"hot").unwrap();
    cache.get(&"cold").unwrap();
    cache.put("new", 3).unwrap();

    assert!(cache.contains(&"hot"));
    assert!(!cache.contains(&"cold"));
}
