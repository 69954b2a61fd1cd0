//! Settle-window debouncing for the free-text search box.
//!
//! Keystrokes are fed into [`Debouncer::input`]; the settled value is only
//! released by [`Debouncer::poll`] once the window has elapsed without
//! further input. The clock is passed in by the caller, which keeps the
//! semantics deterministic under test.
//!
//! This is the contract the list screens' search scripts follow before
//! submitting a new `q` parameter; it is kept here, next to the query
//! types the settled value feeds into, so the rule stays under test.

use std::time::{Duration, Instant};

/// Single settle window used by all search boxes.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a new raw value. Any value still waiting to settle is replaced
    /// and the window restarts from `now`.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.window,
        });
    }

    /// Release the settled value once the window has elapsed. Returns `None`
    /// while the window is still open or when nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }

    /// Drop the pending value without emitting it (screen teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_input_settles_once_with_last_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(400));
        let start = Instant::now();

        debouncer.input("a", start);
        debouncer.input("ab", start + Duration::from_millis(100));
        debouncer.input("abc", start + Duration::from_millis(200));

        // Window restarted at 200ms, nothing settles before 600ms.
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(600)),
            Some("abc".to_string())
        );
        // Exactly one emission.
        assert_eq!(debouncer.poll(start + Duration::from_millis(700)), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.input("abc", start);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + SEARCH_DEBOUNCE), None);
    }

    #[test]
    fn poll_without_input_is_none() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.poll(Instant::now()), None);
    }
}
