// Pulse client library.
// Client-side data synchronization and cache layer for the Pulse social
// API: a typed HTTP transport, bounded LRU object caches, and paginated
// collection managers with optimistic mutation and rollback.

pub mod api;
pub mod cache;
pub mod error;
pub mod platform;
pub mod state;

pub use api::{ApiClient, DEFAULT_PAGE_SIZE, SocialApi};
pub use cache::{LruCache, MediaCache, MediaCacheConfig};
pub use error::{ApiError, Result, UploadError};
pub use state::{
    CommentManager, ConversationManager, FeedManager, MessageThread, NotificationManager,
    PageState, StoryManager, UserManager,
};
