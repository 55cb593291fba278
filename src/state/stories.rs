// Story manager.
// Paginated story tray, most recent first; publishing a story inserts
// the created record at the head.

use log::warn;

use crate::api::client::DEFAULT_PAGE_SIZE;
use crate::api::endpoints::{NewStory, SocialApi};
use crate::api::types::Story;

use super::page::PageState;

/// Manager for the paginated story tray.
pub struct StoryManager<A> {
    api: A,
    pub page: PageState<Story>,
}

impl<A: SocialApi> StoryManager<A> {
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, page_size: u32) -> Self {
        Self {
            api,
            page: PageState::new(page_size),
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.page.items
    }

    /// Reload the tray from the first page.
    pub async fn load_first_page(&mut self) {
        let page = self.page.begin_refresh();
        match self.api.fetch_stories(page, self.page.page_size()).await {
            Ok(stories) => self.page.complete(stories, true),
            Err(err) => {
                warn!("story refresh failed: {}", err);
                self.page.fail(&err);
            }
        }
    }

    /// Fetch and append the next page of stories.
    pub async fn load_next_page(&mut self) {
        let Some(page) = self.page.begin_next_page() else {
            return;
        };
        match self.api.fetch_stories(page, self.page.page_size()).await {
            Ok(stories) => self.page.complete(stories, false),
            Err(err) => {
                warn!("story page {} failed: {}", page, err);
                self.page.fail(&err);
            }
        }
    }

    /// Publish a story; on success it goes to the head of the tray.
    pub async fn create_story(&mut self, story: &NewStory) {
        match self.api.create_story(story).await {
            Ok(created) => self.page.items.insert(0, created),
            Err(err) => {
                warn!("story creation failed: {}", err);
                self.page.last_error = Some(err.to_string());
            }
        }
    }
}
