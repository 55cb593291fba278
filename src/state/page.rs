// Paginated collection state.
// One fetch unit at a time: `current_page` is the next page to request,
// `has_more` latches false after a short page, and `is_loading` enforces
// at most one outstanding fetch.

use crate::error::ApiError;

/// State for a paginated collection of entities.
///
/// The machine is `Idle -> Loading -> Idle` for both success and
/// failure; a failed fetch leaves items and cursor untouched and records
/// the error in `last_error`.
#[derive(Debug, Clone)]
pub struct PageState<T> {
    /// Ordered collection, accumulated across pages.
    pub items: Vec<T>,
    /// Next page to request (1-based).
    pub current_page: u32,
    /// Whether another page may exist.
    pub has_more: bool,
    /// True only while a fetch is outstanding.
    pub is_loading: bool,
    /// Most recent fetch failure, cleared when the next load starts.
    pub last_error: Option<String>,
    page_size: u32,
}

impl<T> PageState<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            has_more: true,
            is_loading: false,
            last_error: None,
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start a refresh: reset the cursor, re-arm `has_more`, clear a
    /// stale loading guard, and return the page to fetch (always 1).
    pub fn begin_refresh(&mut self) -> u32 {
        self.current_page = 1;
        self.has_more = true;
        self.is_loading = true;
        self.last_error = None;
        1
    }

    /// Start fetching the next page, or `None` when a fetch is already
    /// outstanding or the collection is exhausted.
    pub fn begin_next_page(&mut self) -> Option<u32> {
        if self.is_loading || !self.has_more {
            return None;
        }
        self.is_loading = true;
        self.last_error = None;
        Some(self.current_page)
    }

    /// Apply a fetched page. A refresh replaces the collection; a next
    /// page appends. `has_more` holds only when the page came back full.
    pub fn complete(&mut self, mut page: Vec<T>, refresh: bool) {
        self.has_more = page.len() as u32 == self.page_size;
        if refresh {
            self.items = page;
        } else {
            self.items.append(&mut page);
        }
        self.current_page += 1;
        self.is_loading = false;
    }

    /// Record a failed fetch. Items and cursor are left as they were.
    pub fn fail(&mut self, err: &ApiError) {
        self.last_error = Some(err.to_string());
        self.is_loading = false;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state: PageState<u32> = PageState::new(20);
        assert!(state.is_empty());
        assert_eq!(state.current_page, 1);
        assert!(state.has_more);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_next_page_noop_while_loading() {
        let mut state: PageState<u32> = PageState::new(20);
        assert_eq!(state.begin_next_page(), Some(1));
        // A second call while the fetch is outstanding is ignored.
        assert_eq!(state.begin_next_page(), None);
    }

    #[test]
    fn test_next_page_noop_when_exhausted() {
        let mut state: PageState<u32> = PageState::new(3);
        state.begin_next_page();
        state.complete(vec![1, 2], false);

        assert!(!state.has_more);
        assert_eq!(state.begin_next_page(), None);
    }

    #[test]
    fn test_short_page_latches_until_refresh() {
        let mut state: PageState<u32> = PageState::new(3);
        state.begin_next_page();
        state.complete(vec![1], false);
        assert!(!state.has_more);

        // Only a refresh re-arms has_more.
        let page = state.begin_refresh();
        assert_eq!(page, 1);
        assert!(state.has_more);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_full_then_short_page_scenario() {
        let mut state: PageState<u32> = PageState::new(20);

        let page = state.begin_refresh();
        assert_eq!(page, 1);
        state.complete((0..20).collect(), true);
        assert!(state.has_more);
        assert_eq!(state.current_page, 2);

        let page = state.begin_next_page().unwrap();
        assert_eq!(page, 2);
        state.complete((20..25).collect(), false);
        assert!(!state.has_more);
        assert_eq!(state.len(), 25);
    }

    #[test]
    fn test_refresh_replaces_items() {
        let mut state: PageState<u32> = PageState::new(2);
        state.begin_refresh();
        state.complete(vec![1, 2], true);
        state.begin_next_page();
        state.complete(vec![3, 4], false);
        assert_eq!(state.items, vec![1, 2, 3, 4]);

        state.begin_refresh();
        state.complete(vec![9, 8], true);
        assert_eq!(state.items, vec![9, 8]);
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut state: PageState<u32> = PageState::new(2);
        state.begin_refresh();
        state.complete(vec![1, 2], true);

        state.begin_next_page();
        state.fail(&ApiError::ServerError(500));

        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.current_page, 2);
        assert!(state.has_more);
        assert!(!state.is_loading);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_refresh_clears_stale_guard_and_error() {
        let mut state: PageState<u32> = PageState::new(2);
        state.begin_next_page();
        state.fail(&ApiError::ServerError(500));

        state.begin_refresh();
        assert!(state.last_error.is_none());
        assert!(state.is_loading);
    }
}
