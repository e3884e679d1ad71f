//! Bounded cache for caller-owned decoded entries.
//!
//! Decoding a wallpaper costs far more than fitting it, so callers keep
//! recent decodes alive across tab switches and re-layouts. The engine never
//! touches pixels; entries here are whatever the caller decodes (`T`), keyed
//! by [`ImageSource::cache_key`](crate::source::ImageSource::cache_key).
//!
//! # Design
//!
//! A hard capacity with least-recently-used eviction, plus explicit trimming
//! for memory-pressure callbacks. Eviction is always observable and
//! deterministic: `insert` evicts the stalest entries once the capacity is
//! exceeded, and [`shrink_to`](BoundedCache::shrink_to) lets a pressure
//! handler cut the cache to any smaller size (or empty it) at a moment of
//! its choosing.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Bounded key-value store with LRU eviction.
#[derive(Clone, Debug)]
pub struct BoundedCache<T> {
    entries: BTreeMap<String, Slot<T>>,
    capacity: usize,
    tick: u64,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    value: T,
    last_used: u64,
}

impl<T> BoundedCache<T> {
    /// Create a cache holding at most `capacity` entries. A zero capacity
    /// is valid and stores nothing (every insert is dropped).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity,
            tick: 0,
        }
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry exists for `key`, without touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up an entry and mark it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let tick = self.next_tick();
        match self.entries.get_mut(key) {
            Some(slot) => {
                slot.last_used = tick;
                Some(&slot.value)
            }
            None => None,
        }
    }

    /// Look up an entry without touching recency.
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    /// Insert an entry, returning the previous value for the same key.
    ///
    /// If the cache exceeds its capacity afterwards, the least recently
    /// used entries are evicted until it fits.
    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        let tick = self.next_tick();
        let previous = self
            .entries
            .insert(
                key,
                Slot {
                    value,
                    last_used: tick,
                },
            )
            .map(|slot| slot.value);
        if self.entries.len() > self.capacity {
            self.shrink_to(self.capacity);
        }
        previous
    }

    /// Remove an entry.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.entries.remove(key).map(|slot| slot.value)
    }

    /// Evict the `n` least recently used entries. Returns how many were
    /// actually evicted.
    pub fn evict_lru(&mut self, n: usize) -> usize {
        let target = self.entries.len().saturating_sub(n);
        self.shrink_to(target)
    }

    /// Evict least-recently-used entries until at most `target` remain.
    /// Returns how many were evicted. For memory-pressure callbacks;
    /// `shrink_to(0)` empties the cache.
    pub fn shrink_to(&mut self, target: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() > target {
            let stalest = self
                .entries
                .iter()
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(key, _)| key.clone());
            match stalest {
                Some(key) => {
                    self.entries.remove(&key);
                    evicted += 1;
                }
                None => break,
            }
        }
        evicted
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(keys: &[&str]) -> BoundedCache<u32> {
        let mut cache = BoundedCache::new(keys.len());
        for (i, key) in keys.iter().enumerate() {
            cache.insert(key.to_string(), i as u32);
        }
        cache
    }

    #[test]
    fn insert_and_get() {
        let mut cache = BoundedCache::new(4);
        assert_eq!(cache.insert("file:/a.jpg".to_string(), 1), None);
        assert_eq!(cache.get("file:/a.jpg"), Some(&1));
        assert_eq!(cache.get("file:/b.jpg"), None);
        assert_eq!(cache.insert("file:/a.jpg".to_string(), 2), Some(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = cache_with(&["a", "b", "c"]);
        // "a" is the stalest; inserting a fourth entry pushes it out.
        cache.insert("d".to_string(), 9);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b") && cache.contains("c") && cache.contains("d"));
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = cache_with(&["a", "b", "c"]);
        cache.get("a");
        // Now "b" is the stalest.
        cache.insert("d".to_string(), 9);
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn peek_does_not_refresh_recency() {
        let mut cache = cache_with(&["a", "b"]);
        cache.peek("a");
        cache.insert("c".to_string(), 9);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = BoundedCache::new(0);
        cache.insert("a".to_string(), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn evict_lru_counts() {
        let mut cache = cache_with(&["a", "b", "c", "d"]);
        assert_eq!(cache.evict_lru(2), 2);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a") && !cache.contains("b"));
        // Asking for more than remains evicts what's there.
        assert_eq!(cache.evict_lru(10), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn shrink_to_for_memory_pressure() {
        let mut cache = cache_with(&["a", "b", "c", "d"]);
        cache.get("a");
        assert_eq!(cache.shrink_to(1), 3);
        assert_eq!(cache.len(), 1);
        // The refreshed entry survives.
        assert!(cache.contains("a"));
        assert_eq!(cache.shrink_to(0), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = cache_with(&["a", "b"]);
        assert_eq!(cache.remove("a"), Some(0));
        assert_eq!(cache.remove("a"), None);
        cache.clear();
        assert!(cache.is_empty());
    }
}
