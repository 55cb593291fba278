// Pulse API wire types.
// Defines entity records deserialized from the REST backend. Field names
// match the snake_case wire contract bit-exactly; records are immutable
// values mutated only by whole-record replacement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Compact author record embedded in posts, comments, and stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// Full user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub follower_count: u64,
    pub following_count: u64,
    pub post_count: u64,
    #[serde(default)]
    pub is_following: bool,
    pub created_at: DateTime<Utc>,
}

/// A feed post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: UserSummary,
    pub caption: String,
    pub image_url: Option<String>,
    pub like_count: u64,
    pub comment_count: u64,
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// A copy of this post with the like flag flipped and the count
    /// adjusted, for the optimistic half of a like toggle.
    pub fn with_like_toggled(&self) -> Self {
        let mut post = self.clone();
        if post.is_liked {
            post.is_liked = false;
            post.like_count = post.like_count.saturating_sub(1);
        } else {
            post.is_liked = true;
            post.like_count += 1;
        }
        post
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author: UserSummary,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// An ephemeral story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub author: UserSummary,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
    #[serde(other)]
    Unknown,
}

/// An activity notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub kind: NotificationKind,
    pub actor: UserSummary,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationItem {
    /// A copy of this notification marked read.
    pub fn as_read(&self) -> Self {
        let mut item = self.clone();
        item.is_read = true;
        item
    }
}

/// A direct-message conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<UserSummary>,
    pub last_message: Option<ChatMessage>,
    pub unread_count: u64,
    pub updated_at: DateTime<Utc>,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Response from a successful media upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub url: String,
}
