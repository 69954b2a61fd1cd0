//! Last-write-wins fetch tracking for list screens.
//!
//! Every reload of a table goes through a [`FetchState`]: the caller takes a
//! ticket before issuing the request and hands the response back together
//! with that ticket. A response whose ticket is not the most recently issued
//! one is discarded, so a slow stale request can never overwrite the result
//! of a newer query. A failed fetch keeps the previously loaded rows visible
//! and only records the error reason.
//!
//! This is the contract the screens' table-reload scripts follow when a
//! search or filter change races an earlier, slower request.

use super::ListPage;

/// Lifecycle of the most recent list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Proof that a request was issued; carries its sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct FetchState<T> {
    seq: u64,
    status: FetchStatus,
    page: Option<ListPage<T>>,
    error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            seq: 0,
            status: FetchStatus::Idle,
            page: None,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a new request is in flight. Any ticket issued earlier is
    /// superseded from this point on.
    pub fn begin(&mut self) -> FetchTicket {
        self.seq += 1;
        self.status = FetchStatus::Loading;
        FetchTicket(self.seq)
    }

    /// Resolve the request identified by `ticket`. Returns `false` (and
    /// changes nothing) when the ticket has been superseded by a newer
    /// [`begin`](Self::begin).
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<ListPage<T>, String>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
                self.status = FetchStatus::Succeeded;
            }
            Err(reason) => {
                // Keep the last-known-good page on screen.
                self.error = Some(reason);
                self.status = FetchStatus::Failed;
            }
        }
        true
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Rows of the most recently applied successful fetch.
    pub fn rows(&self) -> &[T] {
        self.page.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    /// Authoritative total of the last applied page, if any was loaded.
    pub fn total(&self) -> Option<usize> {
        self.page.as_ref().map(|p| p.total)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_replaces_rows_and_clears_error() {
        let mut state = FetchState::new();
        let ticket = state.begin();
        assert!(state.is_loading());
        assert!(state.complete(ticket, Ok(ListPage::new(vec!["a", "b"], 2))));
        assert_eq!(state.status(), FetchStatus::Succeeded);
        assert_eq!(state.rows(), ["a", "b"]);
        assert_eq!(state.total(), Some(2));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut state = FetchState::new();
        let ticket = state.begin();
        state.complete(ticket, Ok(ListPage::new(vec!["a", "b"], 2)));

        let ticket = state.begin();
        assert!(state.complete(ticket, Err("connection reset".into())));
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.rows(), ["a", "b"]);
        assert_eq!(state.error(), Some("connection reset"));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = FetchState::new();
        let stale = state.begin();
        let fresh = state.begin();

        assert!(state.complete(fresh, Ok(ListPage::new(vec!["new"], 1))));
        assert!(!state.complete(stale, Ok(ListPage::new(vec!["old"], 1))));
        assert_eq!(state.rows(), ["new"]);
    }

    #[test]
    fn stale_failure_does_not_clobber_fresh_result() {
        let mut state = FetchState::new();
        let stale = state.begin();
        let fresh = state.begin();

        state.complete(fresh, Ok(ListPage::new(vec![1], 1)));
        assert!(!state.complete(stale, Err("timeout".into())));
        assert_eq!(state.status(), FetchStatus::Succeeded);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn next_success_clears_a_previous_error() {
        let mut state = FetchState::new();
        let ticket = state.begin();
        state.complete(ticket, Err("boom".into()));

        let ticket = state.begin();
        state.complete(ticket, Ok(ListPage::new(vec![1, 2, 3], 3)));
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), FetchStatus::Succeeded);
    }
}
