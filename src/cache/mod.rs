// Cache module.
// Bounded in-memory LRU caches for decoded images and feed snapshots.

pub mod lru;
pub mod media;

pub use lru::{CacheStats, LruCache};
pub use media::{MediaCache, MediaCacheConfig};
