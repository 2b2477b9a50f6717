/*
[INPUT]:  Cache insert/hit/remove notifications
[OUTPUT]: Keys to evict after an insert
[POS]:    Cache layer - swappable eviction strategies
[UPDATE]: When adding eviction strategies
*/

use std::collections::VecDeque;
use std::fmt::Debug;

use super::CacheKey;

/// Decides which entries leave the cache.
///
/// The cache calls the hooks as entries move; `victims` runs after every
/// insert with the current entry count.
pub trait EvictionPolicy: Debug + Send {
    fn on_insert(&mut self, key: &CacheKey);

    fn on_hit(&mut self, _key: &CacheKey) {}

    fn on_remove(&mut self, key: &CacheKey);

    fn on_clear(&mut self);

    fn victims(&mut self, len: usize) -> Vec<CacheKey>;
}

/// Keeps every entry for the lifetime of the cache
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverEvict;

impl EvictionPolicy for NeverEvict {
    fn on_insert(&mut self, _key: &CacheKey) {}

    fn on_remove(&mut self, _key: &CacheKey) {}

    fn on_clear(&mut self) {}

    fn victims(&mut self, _len: usize) -> Vec<CacheKey> {
        Vec::new()
    }
}

/// Bounded cache evicting the least recently used entry
#[derive(Debug, Clone)]
pub struct LruCapacity {
    capacity: usize,
    // front = least recently used
    order: VecDeque<CacheKey>,
}

impl LruCapacity {
    /// A capacity of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(existing) = self.order.remove(pos) {
                self.order.push_back(existing);
            }
        } else {
            self.order.push_back(key.clone());
        }
    }
}

impl EvictionPolicy for LruCapacity {
    fn on_insert(&mut self, key: &CacheKey) {
        self.touch(key);
    }

    fn on_hit(&mut self, key: &CacheKey) {
        self.touch(key);
    }

    fn on_remove(&mut self, key: &CacheKey) {
        self.order.retain(|k| k != key);
    }

    fn on_clear(&mut self) {
        self.order.clear();
    }

    fn victims(&mut self, len: usize) -> Vec<CacheKey> {
        let excess = len.saturating_sub(self.capacity);
        self.order.iter().take(excess).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QueryParams;

    fn key(market: &str) -> CacheKey {
        CacheKey::new("getticker", &QueryParams::new().with("market", market))
    }

    #[test]
    fn test_never_evict_has_no_victims() {
        let mut policy = NeverEvict;
        policy.on_insert(&key("BTC-LTC"));
        assert!(policy.victims(1_000_000).is_empty());
    }

    #[test]
    fn test_lru_picks_least_recently_used() {
        let mut policy = LruCapacity::new(2);
        policy.on_insert(&key("A"));
        policy.on_insert(&key("B"));
        policy.on_hit(&key("A"));
        policy.on_insert(&key("C"));

        assert_eq!(policy.victims(3), vec![key("B")]);
    }

    #[test]
    fn test_lru_zero_capacity_is_one() {
        let policy = LruCapacity::new(0);
        assert_eq!(policy.capacity(), 1);
    }
}
