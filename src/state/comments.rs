// Comment thread manager.
// Paginated comments for one post, oldest first; a successful create
// appends to the tail. Creation is not optimistic.

use log::warn;

use crate::api::client::DEFAULT_PAGE_SIZE;
use crate::api::endpoints::{NewComment, SocialApi};
use crate::api::types::Comment;

use super::page::PageState;

/// Manager for one post's comment thread.
pub struct CommentManager<A> {
    api: A,
    post_id: String,
    pub page: PageState<Comment>,
}

impl<A: SocialApi> CommentManager<A> {
    pub fn new(api: A, post_id: impl Into<String>) -> Self {
        Self::with_page_size(api, post_id, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, post_id: impl Into<String>, page_size: u32) -> Self {
        Self {
            api,
            post_id: post_id.into(),
            page: PageState::new(page_size),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn comments(&self) -> &[Comment] {
        &self.page.items
    }

    /// Reload the thread from the first page.
    pub async fn load_first_page(&mut self) {
        let page = self.page.begin_refresh();
        match self
            .api
            .fetch_comments(&self.post_id, page, self.page.page_size())
            .await
        {
            Ok(comments) => self.page.complete(comments, true),
            Err(err) => {
                warn!("comment refresh for {} failed: {}", self.post_id, err);
                self.page.fail(&err);
            }
        }
    }

    /// Fetch and append the next page of the thread.
    pub async fn load_next_page(&mut self) {
        let Some(page) = self.page.begin_next_page() else {
            return;
        };
        match self
            .api
            .fetch_comments(&self.post_id, page, self.page.page_size())
            .await
        {
            Ok(comments) => self.page.complete(comments, false),
            Err(err) => {
                warn!("comment page {} for {} failed: {}", page, self.post_id, err);
                self.page.fail(&err);
            }
        }
    }

    /// Post a comment; on success the created record is appended.
    pub async fn create_comment(&mut self, comment: &NewComment) {
        match self.api.create_comment(&self.post_id, comment).await {
            Ok(created) => self.page.items.push(created),
            Err(err) => {
                warn!("comment creation on {} failed: {}", self.post_id, err);
                self.page.last_error = Some(err.to_string());
            }
        }
    }
}
