// Chat managers.
// A paginated conversation list and a per-conversation message thread.
// Sending appends the confirmed message; opening a conversation zeroes
// its unread count locally and notifies the backend.

use log::warn;

use crate::api::client::DEFAULT_PAGE_SIZE;
use crate::api::endpoints::{NewMessage, SocialApi};
use crate::api::types::{ChatMessage, Conversation};

use super::page::PageState;

/// Manager for the conversation list.
pub struct ConversationManager<A> {
    api: A,
    pub page: PageState<Conversation>,
}

impl<A: SocialApi> ConversationManager<A> {
    pub fn new(api: A) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, page_size: u32) -> Self {
        Self {
            api,
            page: PageState::new(page_size),
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.page.items
    }

    /// Total unread messages across all loaded conversations.
    pub fn unread_total(&self) -> u64 {
        self.page.items.iter().map(|c| c.unread_count).sum()
    }

    /// Reload the conversation list from the first page.
    pub async fn load_first_page(&mut self) {
        let page = self.page.begin_refresh();
        match self.api.fetch_conversations(page, self.page.page_size()).await {
            Ok(conversations) => self.page.complete(conversations, true),
            Err(err) => {
                warn!("conversation refresh failed: {}", err);
                self.page.fail(&err);
            }
        }
    }

    /// Fetch and append the next page of conversations.
    pub async fn load_next_page(&mut self) {
        let Some(page) = self.page.begin_next_page() else {
            return;
        };
        match self.api.fetch_conversations(page, self.page.page_size()).await {
            Ok(conversations) => self.page.complete(conversations, false),
            Err(err) => {
                warn!("conversation page {} failed: {}", page, err);
                self.page.fail(&err);
            }
        }
    }

    /// Mark a conversation read: the local record is replaced with a
    /// zero-unread copy immediately, and the backend is notified. A
    /// failed notification is logged, not rolled back; the next refresh
    /// restores authoritative counts.
    pub async fn mark_read(&mut self, conversation_id: &str) {
        let Some(index) = self
            .page
            .items
            .iter()
            .position(|c| c.id == conversation_id)
        else {
            return;
        };

        let mut updated = self.page.items[index].clone();
        updated.unread_count = 0;
        self.page.items[index] = updated;

        if let Err(err) = self.api.mark_conversation_read(conversation_id).await {
            warn!("read receipt for {} failed: {}", conversation_id, err);
            self.page.last_error = Some(err.to_string());
        }
    }
}

/// Manager for one conversation's paginated messages.
pub struct MessageThread<A> {
    api: A,
    conversation_id: String,
    pub page: PageState<ChatMessage>,
}

impl<A: SocialApi> MessageThread<A> {
    pub fn new(api: A, conversation_id: impl Into<String>) -> Self {
        Self::with_page_size(api, conversation_id, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(api: A, conversation_id: impl Into<String>, page_size: u32) -> Self {
        Self {
            api,
            conversation_id: conversation_id.into(),
            page: PageState::new(page_size),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.page.items
    }

    /// Reload the thread from the first page.
    pub async fn load_first_page(&mut self) {
        let page = self.page.begin_refresh();
        match self
            .api
            .fetch_messages(&self.conversation_id, page, self.page.page_size())
            .await
        {
            Ok(messages) => self.page.complete(messages, true),
            Err(err) => {
                warn!("message refresh for {} failed: {}", self.conversation_id, err);
                self.page.fail(&err);
            }
        }
    }

    /// Fetch and append the next page of history.
    pub async fn load_next_page(&mut self) {
        let Some(page) = self.page.begin_next_page() else {
            return;
        };
        match self
            .api
            .fetch_messages(&self.conversation_id, page, self.page.page_size())
            .await
        {
            Ok(messages) => self.page.complete(messages, false),
            Err(err) => {
                warn!(
                    "message page {} for {} failed: {}",
                    page, self.conversation_id, err
                );
                self.page.fail(&err);
            }
        }
    }

    /// Send a message; the confirmed record is appended on success. No
    /// optimistic insert: an unsent message never appears in the thread.
    pub async fn send_message(&mut self, message: &NewMessage) {
        match self.api.send_message(&self.conversation_id, message).await {
            Ok(sent) => self.page.items.push(sent),
            Err(err) => {
                warn!("send to {} failed: {}", self.conversation_id, err);
                self.page.last_error = Some(err.to_string());
            }
        }
    }
}
