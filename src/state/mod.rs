// State management module.
// Collection managers owning paginated state and applying optimistic
// mutations over the injected API seam.

pub mod chat;
pub mod comments;
pub mod feed;
pub mod notifications;
pub mod page;
pub mod stories;
pub mod users;

pub use chat::{ConversationManager, MessageThread};
pub use comments::CommentManager;
pub use feed::FeedManager;
pub use notifications::NotificationManager;
pub use page::PageState;
pub use stories::StoryManager;
pub use users::UserManager;

#[cfg(test)]
pub(crate) mod mock {
    // Scripted transport double for manager tests. Each endpoint has a
    // queue of canned results; unscripted calls fall back to an empty
    // success where that makes sense and panic otherwise.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::api::endpoints::{NewComment, NewMessage, NewPost, NewStory, ProfileUpdate, SocialApi};
    use crate::api::types::{
        ChatMessage, Comment, Conversation, NotificationItem, Post, Story, UserProfile,
        UserSummary,
    };
    use crate::error::Result;

    /// Opt-in log capture for manager tests (RUST_LOG=debug).
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub struct Script<T>(Mutex<VecDeque<Result<T>>>);

    impl<T> Script<T> {
        fn new() -> Self {
            Self(Mutex::new(VecDeque::new()))
        }

        pub fn push(&self, result: Result<T>) {
            self.0.lock().unwrap().push_back(result);
        }

        fn pop(&self) -> Option<Result<T>> {
            self.0.lock().unwrap().pop_front()
        }
    }

    pub struct MockApi {
        pub feed: Script<Vec<Post>>,
        pub create_post: Script<Post>,
        pub delete_post: Script<()>,
        pub like: Script<()>,
        pub unlike: Script<()>,
        pub comments: Script<Vec<Comment>>,
        pub create_comment: Script<Comment>,
        pub stories: Script<Vec<Story>>,
        pub create_story: Script<Story>,
        pub profile: Script<UserProfile>,
        pub update_profile: Script<UserProfile>,
        pub search: Script<Vec<UserSummary>>,
        pub follow: Script<()>,
        pub unfollow: Script<()>,
        pub notifications: Script<Vec<NotificationItem>>,
        pub conversations: Script<Vec<Conversation>>,
        pub messages: Script<Vec<ChatMessage>>,
        pub send_message: Script<ChatMessage>,
        pub mark_read: Script<()>,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self {
                feed: Script::new(),
                create_post: Script::new(),
                delete_post: Script::new(),
                like: Script::new(),
                unlike: Script::new(),
                comments: Script::new(),
                create_comment: Script::new(),
                stories: Script::new(),
                create_story: Script::new(),
                profile: Script::new(),
                update_profile: Script::new(),
                search: Script::new(),
                follow: Script::new(),
                unfollow: Script::new(),
                notifications: Script::new(),
                conversations: Script::new(),
                messages: Script::new(),
                send_message: Script::new(),
                mark_read: Script::new(),
            }
        }
    }

    #[async_trait]
    impl SocialApi for MockApi {
        async fn fetch_feed(&self, _page: u32, _limit: u32) -> Result<Vec<Post>> {
            self.feed.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_post(&self, _post: &NewPost) -> Result<Post> {
            self.create_post.pop().expect("unscripted create_post")
        }

        async fn delete_post(&self, _post_id: &str) -> Result<()> {
            self.delete_post.pop().unwrap_or(Ok(()))
        }

        async fn like_post(&self, _post_id: &str) -> Result<()> {
            self.like.pop().unwrap_or(Ok(()))
        }

        async fn unlike_post(&self, _post_id: &str) -> Result<()> {
            self.unlike.pop().unwrap_or(Ok(()))
        }

        async fn fetch_comments(
            &self,
            _post_id: &str,
            _page: u32,
            _limit: u32,
        ) -> Result<Vec<Comment>> {
            self.comments.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_comment(&self, _post_id: &str, _comment: &NewComment) -> Result<Comment> {
            self.create_comment.pop().expect("unscripted create_comment")
        }

        async fn fetch_stories(&self, _page: u32, _limit: u32) -> Result<Vec<Story>> {
            self.stories.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_story(&self, _story: &NewStory) -> Result<Story> {
            self.create_story.pop().expect("unscripted create_story")
        }

        async fn get_profile(&self, _user_id: &str) -> Result<UserProfile> {
            self.profile.pop().expect("unscripted get_profile")
        }

        async fn update_profile(
            &self,
            _user_id: &str,
            _update: &ProfileUpdate,
        ) -> Result<UserProfile> {
            self.update_profile.pop().expect("unscripted update_profile")
        }

        async fn search_users(
            &self,
            _query: &str,
            _page: u32,
            _limit: u32,
        ) -> Result<Vec<UserSummary>> {
            self.search.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn follow_user(&self, _user_id: &str) -> Result<()> {
            self.follow.pop().unwrap_or(Ok(()))
        }

        async fn unfollow_user(&self, _user_id: &str) -> Result<()> {
            self.unfollow.pop().unwrap_or(Ok(()))
        }

        async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>> {
            self.notifications.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_conversations(&self, _page: u32, _limit: u32) -> Result<Vec<Conversation>> {
            self.conversations.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_messages(
            &self,
            _conversation_id: &str,
            _page: u32,
            _limit: u32,
        ) -> Result<Vec<ChatMessage>> {
            self.messages.pop().unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn send_message(
            &self,
            _conversation_id: &str,
            _message: &NewMessage,
        ) -> Result<ChatMessage> {
            self.send_message.pop().expect("unscripted send_message")
        }

        async fn mark_conversation_read(&self, _conversation_id: &str) -> Result<()> {
            self.mark_read.pop().unwrap_or(Ok(()))
        }
    }
}
