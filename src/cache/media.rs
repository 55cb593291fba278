// Media cache manager.
// Two independently bounded LRU caches: decoded image bytes keyed by
// URL, and serialized post collections keyed by feed id. Collections
// are stored as JSON with cost equal to the encoded length.

use std::sync::{Mutex, PoisonError};

use bytes::Bytes;
use log::warn;

use crate::api::types::Post;

use super::lru::{CacheStats, LruCache};

/// Capacity limits for the two media caches.
#[derive(Debug, Clone, Copy)]
pub struct MediaCacheConfig {
    pub image_max_entries: usize,
    pub image_max_cost: usize,
    pub feed_max_entries: usize,
    pub feed_max_cost: usize,
}

impl Default for MediaCacheConfig {
    fn default() -> Self {
        Self {
            image_max_entries: 200,
            image_max_cost: 50 * 1024 * 1024,
            feed_max_entries: 16,
            feed_max_cost: 8 * 1024 * 1024,
        }
    }
}

/// Process-wide object cache for images and feed snapshots.
///
/// A miss is never an error; callers fall back to the transport. Each
/// internal mutex is held only across map mutation, never across I/O.
pub struct MediaCache {
    images: Mutex<LruCache<Bytes>>,
    feeds: Mutex<LruCache<Vec<u8>>>,
}

impl MediaCache {
    pub fn new(config: MediaCacheConfig) -> Self {
        Self {
            images: Mutex::new(LruCache::new(config.image_max_entries, config.image_max_cost)),
            feeds: Mutex::new(LruCache::new(config.feed_max_entries, config.feed_max_cost)),
        }
    }

    /// Cache decoded image bytes under their source URL.
    pub fn put_image(&self, url: &str, data: Bytes) {
        let cost = data.len();
        lock(&self.images).put(url, data, cost);
    }

    /// Fetch cached image bytes, refreshing recency on a hit.
    pub fn get_image(&self, url: &str) -> Option<Bytes> {
        lock(&self.images).get(url).cloned()
    }

    /// Cache a feed snapshot. Encoding failures are logged and skipped;
    /// the cache never propagates errors to callers.
    pub fn put_feed(&self, feed_id: &str, posts: &[Post]) {
        match serde_json::to_vec(posts) {
            Ok(encoded) => {
                let cost = encoded.len();
                lock(&self.feeds).put(feed_id, encoded, cost);
            }
            Err(err) => warn!("failed to encode feed '{}' for cache: {}", feed_id, err),
        }
    }

    /// Fetch a cached feed snapshot. An undecodable entry counts as a
    /// miss.
    pub fn get_feed(&self, feed_id: &str) -> Option<Vec<Post>> {
        let encoded = lock(&self.feeds).get(feed_id).cloned()?;
        match serde_json::from_slice(&encoded) {
            Ok(posts) => Some(posts),
            Err(err) => {
                warn!("dropping undecodable cached feed '{}': {}", feed_id, err);
                None
            }
        }
    }

    /// Drop all cached images and feeds.
    pub fn clear(&self) {
        lock(&self.images).clear();
        lock(&self.feeds).clear();
    }

    /// Counter snapshots for (images, feeds).
    pub fn stats(&self) -> (CacheStats, CacheStats) {
        (lock(&self.images).stats(), lock(&self.feeds).stats())
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new(MediaCacheConfig::default())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserSummary;
    use chrono::Utc;

    fn sample_post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            author: UserSummary {
                id: "u1".to_string(),
                username: "ben".to_string(),
                display_name: "Ben".to_string(),
                avatar_url: None,
            },
            caption: "hello".to_string(),
            image_url: None,
            like_count: 0,
            comment_count: 0,
            is_liked: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_image_round_trip() {
        let cache = MediaCache::default();
        cache.put_image("https://cdn.example.com/a.jpg", Bytes::from_static(b"jpeg"));

        assert_eq!(
            cache.get_image("https://cdn.example.com/a.jpg"),
            Some(Bytes::from_static(b"jpeg"))
        );
        assert_eq!(cache.get_image("https://cdn.example.com/b.jpg"), None);
    }

    #[test]
    fn test_feed_round_trip() {
        let cache = MediaCache::default();
        let posts = vec![sample_post("p1"), sample_post("p2")];

        cache.put_feed("home", &posts);
        assert_eq!(cache.get_feed("home"), Some(posts));
        assert_eq!(cache.get_feed("explore"), None);
    }

    #[test]
    fn test_image_cost_bound() {
        let cache = MediaCache::new(MediaCacheConfig {
            image_max_entries: 10,
            image_max_cost: 8,
            feed_max_entries: 4,
            feed_max_cost: 1024,
        });

        cache.put_image("a", Bytes::from_static(b"12345"));
        cache.put_image("b", Bytes::from_static(b"12345"));

        // Aggregate cost exceeded; the older image is evicted.
        assert_eq!(cache.get_image("a"), None);
        assert!(cache.get_image("b").is_some());
    }

    #[test]
    fn test_clear() {
        let cache = MediaCache::default();
        cache.put_image("a", Bytes::from_static(b"x"));
        cache.put_feed("home", &[sample_post("p1")]);

        cache.clear();
        assert_eq!(cache.get_image("a"), None);
        assert_eq!(cache.get_feed("home"), None);
    }
}
