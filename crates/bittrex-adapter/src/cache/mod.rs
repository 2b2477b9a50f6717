/*
[INPUT]:  Decoded responses keyed by accessor call
[OUTPUT]: Memoized responses for the lifetime of a client
[POS]:    Cache layer - response store with pluggable eviction
[UPDATE]: When cache semantics or eviction hooks change
*/

pub mod key;
pub mod policy;

pub use key::CacheKey;
pub use policy::{EvictionPolicy, LruCapacity, NeverEvict};

use serde_json::Value;
use std::collections::HashMap;
use tracing::trace;

/// Response store holding at most one value per [`CacheKey`]
#[derive(Debug)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, Value>,
    policy: Box<dyn EvictionPolicy>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache {
    /// Unbounded cache that never evicts
    pub fn new() -> Self {
        Self::with_policy(Box::new(NeverEvict))
    }

    pub fn with_policy(policy: Box<dyn EvictionPolicy>) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }

    /// Cache matching an optional capacity: `None` never evicts
    pub fn with_capacity_limit(capacity: Option<usize>) -> Self {
        match capacity {
            Some(capacity) => Self::with_policy(Box::new(LruCapacity::new(capacity))),
            None => Self::new(),
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<&Value> {
        if self.entries.contains_key(key) {
            self.policy.on_hit(key);
            trace!(key = %key, "cache hit");
        } else {
            trace!(key = %key, "cache miss");
        }
        self.entries.get(key)
    }

    /// Store `value`, replacing any previous entry for `key`
    pub fn insert(&mut self, key: CacheKey, value: Value) {
        self.policy.on_insert(&key);
        self.entries.insert(key, value);

        for victim in self.policy.victims(self.entries.len()) {
            trace!(key = %victim, "cache evict");
            self.entries.remove(&victim);
            self.policy.on_remove(&victim);
        }
    }

    pub fn remove(&mut self, key: &CacheKey) -> Option<Value> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.policy.on_remove(key);
        }
        removed
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.policy.on_clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
