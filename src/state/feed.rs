// Feed manager.
// Owns the paginated home feed, applies optimistic like toggles and
// deletes with full rollback on failure, and writes refreshed pages
// through the media cache.

use std::sync::Arc;

use log::warn;

use crate::api::client::DEFAULT_PAGE_SIZE;
use crate::api::endpoints::{NewPost, SocialApi};
use crate::api::types::Post;
use crate::cache::MediaCache;

use super::page::PageState;

/// Manager for a paginated post feed.
///
/// All mutation goes through `&mut self`, so a single owner serializes
/// state changes; the page guard keeps at most one fetch outstanding.
pub struct FeedManager<A> {
    api: A,
    feed_id: String,
    cache: Option<Arc<MediaCache>>,
    pub page: PageState<Post>,
}

impl<A: SocialApi> FeedManager<A> {
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, page_size: u32) -> Self {
        Self {
            api,
            feed_id: "home".to_string(),
            cache: None,
            page: PageState::new(page_size),
        }
    }

    /// Attach a media cache; refreshed first pages are written through
    /// under this manager's feed id.
    pub fn with_cache(mut self, cache: Arc<MediaCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.page.items
    }

    /// The cached snapshot of this feed, if one survives in the cache.
    pub fn cached_posts(&self) -> Option<Vec<Post>> {
        self.cache.as_ref()?.get_feed(&self.feed_id)
    }

    /// Reload the feed from the first page, replacing the collection.
    pub async fn load_first_page(&mut self) {
        let page = self.page.begin_refresh();
        match self.api.fetch_feed(page, self.page.page_size()).await {
            Ok(posts) => {
                self.page.complete(posts, true);
                if let Some(cache) = &self.cache {
                    cache.put_feed(&self.feed_id, &self.page.items);
                }
            }
            Err(err) => {
                warn!("feed refresh failed: {}", err);
                self.page.fail(&err);
            }
        }
    }

    /// Fetch and append the next page. No-op while a fetch is
    /// outstanding or after the feed is exhausted.
    pub async fn load_next_page(&mut self) {
        let Some(page) = self.page.begin_next_page() else {
            return;
        };
        match self.api.fetch_feed(page, self.page.page_size()).await {
            Ok(posts) => self.page.complete(posts, false),
            Err(err) => {
                warn!("feed page {} failed: {}", page, err);
                self.page.fail(&err);
            }
        }
    }

    /// Toggle a post's like optimistically.
    ///
    /// The collection is updated before the network call; a failed
    /// confirmation restores the exact pre-toggle record. An unknown id
    /// is a no-op.
    pub async fn toggle_like(&mut self, post_id: &str) {
        let Some(index) = self.position(post_id) else {
            return;
        };
        let snapshot = self.page.items[index].clone();
        self.page.items[index] = snapshot.with_like_toggled();

        let result = if snapshot.is_liked {
            self.api.unlike_post(post_id).await
        } else {
            self.api.like_post(post_id).await
        };

        if let Err(err) = result {
            warn!("like toggle for {} rejected, rolling back: {}", post_id, err);
            if let Some(index) = self.position(post_id) {
                self.page.items[index] = snapshot;
            }
            self.page.last_error = Some(err.to_string());
        }
    }

    /// Create a post. No optimistic insert: on success the new record
    /// goes to the head of the feed, on failure nothing changes.
    pub async fn create_post(&mut self, post: &NewPost) {
        match self.api.create_post(post).await {
            Ok(created) => self.page.items.insert(0, created),
            Err(err) => {
                warn!("post creation failed: {}", err);
                self.page.last_error = Some(err.to_string());
            }
        }
    }

    /// Delete a post optimistically, restoring it at its old position
    /// if the server rejects the delete.
    pub async fn delete_post(&mut self, post_id: &str) {
        let Some(index) = self.position(post_id) else {
            return;
        };
        let snapshot = self.page.items.remove(index);

        if let Err(err) = self.api.delete_post(post_id).await {
            warn!("delete of {} rejected, restoring: {}", post_id, err);
            let index = index.min(self.page.items.len());
            self.page.items.insert(index, snapshot);
            self.page.last_error = Some(err.to_string());
        }
    }

    fn position(&self, post_id: &str) -> Option<usize> {
        self.page.items.iter().position(|p| p.id == post_id)
    }
}
