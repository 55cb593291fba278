// User manager.
// Profile load/update, paginated user search, and an optimistic follow
// toggle that mirrors the like protocol: apply locally, confirm over
// the network, roll back on rejection.

use log::warn;

use crate::api::client::DEFAULT_PAGE_SIZE;
use crate::api::endpoints::{ProfileUpdate, SocialApi};
use crate::api::types::{UserProfile, UserSummary};

use super::page::PageState;

/// Manager for user profiles and search.
pub struct UserManager<A> {
    api: A,
    pub profile: Option<UserProfile>,
    pub search: PageState<UserSummary>,
    query: String,
    pub last_error: Option<String>,
}

impl<A: SocialApi> UserManager<A> {
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, page_size: u32) -> Self {
        Self {
            api,
            profile: None,
            search: PageState::new(page_size),
            query: String::new(),
            last_error: None,
        }
    }

    /// Load a profile, replacing any previously loaded one.
    pub async fn load_profile(&mut self, user_id: &str) {
        match self.api.get_profile(user_id).await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.last_error = None;
            }
            Err(err) => {
                warn!("profile load for {} failed: {}", user_id, err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Apply a profile update; the loaded record is replaced with the
    /// server's response on success.
    pub async fn update_profile(&mut self, user_id: &str, update: &ProfileUpdate) {
        match self.api.update_profile(user_id, update).await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.last_error = None;
            }
            Err(err) => {
                warn!("profile update for {} failed: {}", user_id, err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Start a new search: replaces the query and loads the first page
    /// of results.
    pub async fn search(&mut self, query: &str) {
        self.query = query.to_string();
        let page = self.search.begin_refresh();
        self.fetch_results(page, true).await;
    }

    /// Fetch and append the next page of results for the active query.
    pub async fn load_more_results(&mut self) {
        let Some(page) = self.search.begin_next_page() else {
            return;
        };
        self.fetch_results(page, false).await;
    }

    async fn fetch_results(&mut self, page: u32, refresh: bool) {
        match self
            .api
            .search_users(&self.query, page, self.search.page_size())
            .await
        {
            Ok(users) => self.search.complete(users, refresh),
            Err(err) => {
                warn!("user search '{}' page {} failed: {}", self.query, page, err);
                self.search.fail(&err);
            }
        }
    }

    /// Toggle following for the loaded profile, optimistically.
    ///
    /// The profile is replaced with a flipped copy before the network
    /// call and restored to the exact prior record on failure. No-op
    /// when no profile is loaded.
    pub async fn toggle_follow(&mut self) {
        let Some(snapshot) = self.profile.clone() else {
            return;
        };

        let mut flipped = snapshot.clone();
        if flipped.is_following {
            flipped.is_following = false;
            flipped.follower_count = flipped.follower_count.saturating_sub(1);
        } else {
            flipped.is_following = true;
            flipped.follower_count += 1;
        }
        self.profile = Some(flipped);

        let result = if snapshot.is_following {
            self.api.unfollow_user(&snapshot.id).await
        } else {
            self.api.follow_user(&snapshot.id).await
        };

        if let Err(err) = result {
            warn!("follow toggle for {} rejected, rolling back: {}", snapshot.id, err);
            self.last_error = Some(err.to_string());
            self.profile = Some(snapshot);
        }
    }
}
