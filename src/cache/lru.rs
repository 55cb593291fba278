// Bounded least-recently-used cache.
// Entries carry an integer byte cost; the cache enforces both an entry
// count limit and a total cost limit, evicting the least recently
// accessed entry first (insertion order breaks ties).

use indexmap::IndexMap;

/// Hit/miss/eviction counters, cumulative over the cache's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

struct Entry<V> {
    value: V,
    cost: usize,
}

/// An LRU cache bounded by entry count and aggregate byte cost.
///
/// The map is kept in access order: the front entry is the
/// least-recently-used candidate for eviction.
pub struct LruCache<V> {
    entries: IndexMap<String, Entry<V>>,
    max_entries: usize,
    max_total_cost: usize,
    total_cost: usize,
    stats: CacheStats,
}

impl<V> LruCache<V> {
    /// Create a cache bounded by `max_entries` and `max_total_cost` bytes.
    pub fn new(max_entries: usize, max_total_cost: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            max_entries,
            max_total_cost,
            total_cost: 0,
            stats: CacheStats::default(),
        }
    }

    /// Insert or replace an entry, then evict least-recently-used
    /// entries (never the one just inserted) until both limits hold.
    pub fn put(&mut self, key: impl Into<String>, value: V, cost: usize) {
        let key = key.into();

        if let Some(old) = self.entries.shift_remove(&key) {
            self.total_cost -= old.cost;
        }
        self.entries.insert(key, Entry { value, cost });
        self.total_cost += cost;

        while (self.entries.len() > self.max_entries || self.total_cost > self.max_total_cost)
            && self.entries.len() > 1
        {
            if let Some((_, evicted)) = self.entries.shift_remove_index(0) {
                self.total_cost -= evicted.cost;
                self.stats.evictions += 1;
            }
        }
    }

    /// Look up an entry. A hit refreshes its recency; a miss is not an
    /// error, callers fall back to the transport.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.entries.shift_remove_entry(key) {
            Some((key, entry)) => {
                self.stats.hits += 1;
                let index = self.entries.len();
                self.entries.insert(key, entry);
                self.entries.get_index(index).map(|(_, e)| &e.value)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Whether an entry exists, without touching recency or counters.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop all entries unconditionally and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_cost = 0;
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current aggregate cost of all entries, in bytes.
    pub fn total_cost(&self) -> usize {
        self.total_cost
    }

    /// Snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
