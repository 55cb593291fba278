// Pulse API module.
// Provides the HTTP client, typed endpoints, and wire types for the
// Pulse REST backend.

pub mod client;
pub mod endpoints;
pub mod types;
pub mod upload;

pub use client::{ApiClient, DEFAULT_PAGE_SIZE};
pub use endpoints::{
    NewComment, NewMessage, NewPost, NewStory, ProfileUpdate, SocialApi,
};
pub use types::*;
