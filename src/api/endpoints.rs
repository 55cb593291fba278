// Pulse API endpoint functions.
// Typed methods for the REST contract: profiles, feed, comments, stories,
// notifications, and chat. Pagination uses 1-based `page` plus `limit`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::client::ApiClient;
use super::types::{
    ChatMessage, Comment, Conversation, NotificationItem, Post, Story, UserProfile, UserSummary,
};

/// Response wrapper for the feed.
#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

/// Response wrapper for comment threads.
#[derive(Debug, Deserialize)]
struct CommentsResponse {
    comments: Vec<Comment>,
}

/// Response wrapper for the story tray.
#[derive(Debug, Deserialize)]
struct StoriesResponse {
    stories: Vec<Story>,
}

/// Response wrapper for user search.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<UserSummary>,
}

/// Response wrapper for notifications.
#[derive(Debug, Deserialize)]
struct NotificationsResponse {
    notifications: Vec<NotificationItem>,
}

/// Response wrapper for conversation lists.
#[derive(Debug, Deserialize)]
struct ConversationsResponse {
    conversations: Vec<Conversation>,
}

/// Response wrapper for message pages.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    messages: Vec<ChatMessage>,
}

/// Body for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub caption: String,
    pub image_url: Option<String>,
}

/// Body for creating a comment.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub text: String,
}

/// Body for creating a story.
#[derive(Debug, Clone, Serialize)]
pub struct NewStory {
    pub image_url: String,
}

/// Body for a profile update. `None` fields are omitted from the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body for sending a chat message.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub text: String,
}

fn page_params(page: u32, limit: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("limit", limit.to_string())]
}

impl ApiClient {
    /// Get the authenticated user's profile.
    pub async fn get_current_profile(&self) -> Result<UserProfile> {
        self.get("/users/me").await
    }

    /// Get a user's profile by id.
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get(&format!("/users/{}", user_id)).await
    }

    /// Update a user's profile, returning the replacement record.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        self.put(&format!("/users/{}", user_id), update).await
    }

    /// Search users by name.
    pub async fn search_users(
        &self,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<UserSummary>> {
        let mut params = vec![("q", query.to_string())];
        params.extend(page_params(page, limit));
        let wrapper: UsersResponse = self.get_with_params("/users/search", &params).await?;
        Ok(wrapper.users)
    }

    /// Follow a user.
    pub async fn follow_user(&self, user_id: &str) -> Result<()> {
        self.post_empty(&format!("/users/{}/follow", user_id)).await
    }

    /// Unfollow a user.
    pub async fn unfollow_user(&self, user_id: &str) -> Result<()> {
        self.delete(&format!("/users/{}/follow", user_id)).await
    }

    /// Get one page of the home feed.
    pub async fn fetch_feed(&self, page: u32, limit: u32) -> Result<Vec<Post>> {
        let wrapper: PostsResponse = self
            .get_with_params("/posts", &page_params(page, limit))
            .await?;
        Ok(wrapper.posts)
    }

    /// Get a single post.
    pub async fn get_post(&self, post_id: &str) -> Result<Post> {
        self.get(&format!("/posts/{}", post_id)).await
    }

    /// Create a post.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.post("/posts", post).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        self.delete(&format!("/posts/{}", post_id)).await
    }

    /// Like a post.
    pub async fn like_post(&self, post_id: &str) -> Result<()> {
        self.post_empty(&format!("/posts/{}/like", post_id)).await
    }

    /// Remove a like from a post.
    pub async fn unlike_post(&self, post_id: &str) -> Result<()> {
        self.delete(&format!("/posts/{}/like", post_id)).await
    }

    /// Get one page of a post's comment thread.
    pub async fn fetch_comments(
        &self,
        post_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Comment>> {
        let wrapper: CommentsResponse = self
            .get_with_params(
                &format!("/posts/{}/comments", post_id),
                &page_params(page, limit),
            )
            .await?;
        Ok(wrapper.comments)
    }

    /// Add a comment to a post.
    pub async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment> {
        self.post(&format!("/posts/{}/comments", post_id), comment)
            .await
    }

    /// Get one page of the story tray.
    pub async fn fetch_stories(&self, page: u32, limit: u32) -> Result<Vec<Story>> {
        let wrapper: StoriesResponse = self
            .get_with_params("/stories", &page_params(page, limit))
            .await?;
        Ok(wrapper.stories)
    }

    /// Publish a story.
    pub async fn create_story(&self, story: &NewStory) -> Result<Story> {
        self.post("/stories", story).await
    }

    /// Get the full notification list (not paginated).
    pub async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>> {
        let wrapper: NotificationsResponse = self.get("/notifications").await?;
        Ok(wrapper.notifications)
    }

    /// Get one page of the conversation list.
    pub async fn fetch_conversations(&self, page: u32, limit: u32) -> Result<Vec<Conversation>> {
        let wrapper: ConversationsResponse = self
            .get_with_params("/conversations", &page_params(page, limit))
            .await?;
        Ok(wrapper.conversations)
    }

    /// Get one page of a conversation's messages.
    pub async fn fetch_messages(
        &self,
        conversation_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ChatMessage>> {
        let wrapper: MessagesResponse = self
            .get_with_params(
                &format!("/conversations/{}/messages", conversation_id),
                &page_params(page, limit),
            )
            .await?;
        Ok(wrapper.messages)
    }

    /// Send a chat message.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<ChatMessage> {
        self.post(
            &format!("/conversations/{}/messages", conversation_id),
            message,
        )
        .await
    }

    /// Tell the backend a conversation has been read.
    pub async fn mark_conversation_read(&self, conversation_id: &str) -> Result<()> {
        self.post_empty(&format!("/conversations/{}/read", conversation_id))
            .await
    }
}

/// The slice of the API the collection managers depend on.
///
/// Managers receive an implementation by injection, so tests can drive
/// them with a scripted double instead of a live transport.
#[async_trait]
pub trait SocialApi: Send + Sync {
    async fn fetch_feed(&self, page: u32, limit: u32) -> Result<Vec<Post>>;
    async fn create_post(&self, post: &NewPost) -> Result<Post>;
    async fn delete_post(&self, post_id: &str) -> Result<()>;
    async fn like_post(&self, post_id: &str) -> Result<()>;
    async fn unlike_post(&self, post_id: &str) -> Result<()>;

    async fn fetch_comments(&self, post_id: &str, page: u32, limit: u32) -> Result<Vec<Comment>>;
    async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment>;

    async fn fetch_stories(&self, page: u32, limit: u32) -> Result<Vec<Story>>;
    async fn create_story(&self, story: &NewStory) -> Result<Story>;

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<UserProfile>;
    async fn search_users(&self, query: &str, page: u32, limit: u32) -> Result<Vec<UserSummary>>;
    async fn follow_user(&self, user_id: &str) -> Result<()>;
    async fn unfollow_user(&self, user_id: &str) -> Result<()>;

    async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>>;

    async fn fetch_conversations(&self, page: u32, limit: u32) -> Result<Vec<Conversation>>;
    async fn fetch_messages(
        &self,
        conversation_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ChatMessage>>;
    async fn send_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<ChatMessage>;
    async fn mark_conversation_read(&self, conversation_id: &str) -> Result<()>;
}

#[async_trait]
impl SocialApi for ApiClient {
    async fn fetch_feed(&self, page: u32, limit: u32) -> Result<Vec<Post>> {
        ApiClient::fetch_feed(self, page, limit).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        ApiClient::create_post(self, post).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<()> {
        ApiClient::delete_post(self, post_id).await
    }

    async fn like_post(&self, post_id: &str) -> Result<()> {
        ApiClient::like_post(self, post_id).await
    }

    async fn unlike_post(&self, post_id: &str) -> Result<()> {
        ApiClient::unlike_post(self, post_id).await
    }

    async fn fetch_comments(&self, post_id: &str, page: u32, limit: u32) -> Result<Vec<Comment>> {
        ApiClient::fetch_comments(self, post_id, page, limit).await
    }

    async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment> {
        ApiClient::create_comment(self, post_id, comment).await
    }

    async fn fetch_stories(&self, page: u32, limit: u32) -> Result<Vec<Story>> {
        ApiClient::fetch_stories(self, page, limit).await
    }

    async fn create_story(&self, story: &NewStory) -> Result<Story> {
        ApiClient::create_story(self, story).await
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        ApiClient::get_profile(self, user_id).await
    }

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<UserProfile> {
        ApiClient::update_profile(self, user_id, update).await
    }

    async fn search_users(&self, query: &str, page: u32, limit: u32) -> Result<Vec<UserSummary>> {
        ApiClient::search_users(self, query, page, limit).await
    }

    async fn follow_user(&self, user_id: &str) -> Result<()> {
        ApiClient::follow_user(self, user_id).await
    }

    async fn unfollow_user(&self, user_id: &str) -> Result<()> {
        ApiClient::unfollow_user(self, user_id).await
    }

    async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>> {
        ApiClient::fetch_notifications(self).await
    }

    async fn fetch_conversations(&self, page: u32, limit: u32) -> Result<Vec<Conversation>> {
        ApiClient::fetch_conversations(self, page, limit).await
    }

    async fn fetch_messages(
        &self,
        conversation_id: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ChatMessage>> {
        ApiClient::fetch_messages(self, conversation_id, page, limit).await
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<ChatMessage> {
        ApiClient::send_message(self, conversation_id, message).await
    }

    async fn mark_conversation_read(&self, conversation_id: &str) -> Result<()> {
        ApiClient::mark_conversation_read(self, conversation_id).await
    }
}
