//! The debounced search trigger.
//!
//! [`SearchTrigger`] turns a stream of input-change events into at most one search
//! request per quiet period. Each input element owns its own trigger, so there is
//! never more than one armed timer per input.
//!
//! # State Machine
//!
//! ```text
//! Idle ──input──▶ Waiting ──fire──▶ Idle
//!                   │  ▲
//!                   └──┘ input (previous timer cancelled, new one armed)
//! ```
//!
//! A fire only becomes a [`SearchRequest`] when the trimmed query has at least
//! `min_query_len` characters. Accepted requests are numbered so that replies can
//! be matched against the latest request later.

use super::debouncer::{Debouncer, Fired};
use crate::domain::SearchQuery;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// A debounced query delivered to the event loop.
pub type FiredQuery = Fired<SearchQuery>;

/// An accepted search request, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Per-trigger sequence number, starting at 1.
    pub seq: u64,
    /// Trimmed query to send.
    pub query: SearchQuery,
}

/// Observable trigger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// No timer armed.
    Idle,
    /// A timer is armed and waiting for its quiet period.
    Waiting,
}

/// Debounced search trigger for a single input element.
#[derive(Debug)]
pub struct SearchTrigger {
    debouncer: Debouncer<SearchQuery>,
    min_query_len: usize,
    query: SearchQuery,
    next_seq: u64,
    last_issued: Option<u64>,
}

impl SearchTrigger {
    /// Creates an idle trigger.
    ///
    /// Fires are delivered on `fired` and must be passed back to
    /// [`fire`](Self::fire) by the owner's event loop.
    #[must_use]
    pub fn new(
        quiet_period: Duration,
        min_query_len: usize,
        fired: UnboundedSender<FiredQuery>,
    ) -> Self {
        Self {
            debouncer: Debouncer::new(quiet_period, fired),
            min_query_len,
            query: SearchQuery::default(),
            next_seq: 1,
            last_issued: None,
        }
    }

    /// Handles an input-change event with the raw input value.
    ///
    /// Trims the value, cancels any pending timer and arms a new one. Must be
    /// called from within a tokio runtime.
    pub fn on_input_change(&mut self, raw: &str) -> &SearchQuery {
        self.query = SearchQuery::from_raw(raw);
        let generation = self.debouncer.schedule(self.query.clone());

        tracing::trace!(
            generation,
            query_len = self.query.char_len(),
            "input change scheduled"
        );

        &self.query
    }

    /// Handles a timer fire.
    ///
    /// Returns a request when the fire is current and the query is long enough,
    /// `None` otherwise. Either way a current fire returns the trigger to idle.
    pub fn fire(&mut self, fired: FiredQuery) -> Option<SearchRequest> {
        if !self.debouncer.settle(&fired) {
            return None;
        }

        let query = fired.value;
        if !query.is_searchable(self.min_query_len) {
            tracing::trace!(
                query_len = query.char_len(),
                min_query_len = self.min_query_len,
                "query too short, not searching"
            );
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.last_issued = Some(seq);

        tracing::debug!(seq, query = %query, "search request issued");
        Some(SearchRequest { seq, query })
    }

    /// Disarms the pending timer, if any.
    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel()
    }

    #[must_use]
    pub const fn state(&self) -> TriggerState {
        if self.debouncer.is_armed() {
            TriggerState::Waiting
        } else {
            TriggerState::Idle
        }
    }

    /// Trimmed query from the most recent input change.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Sequence number of the most recently issued request.
    #[must_use]
    pub const fn last_issued(&self) -> Option<u64> {
        self.last_issued
    }

    /// Whether `seq` identifies the most recently issued request.
    #[must_use]
    pub fn is_latest(&self, seq: u64) -> bool {
        self.last_issued == Some(seq)
    }

    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        self.debouncer.quiet_period()
    }

    #[must_use]
    pub const fn min_query_len(&self) -> usize {
        self.min_query_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn trigger() -> (SearchTrigger, UnboundedReceiver<FiredQuery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SearchTrigger::new(Duration::from_millis(300), 2, tx), rx)
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn drain(trigger: &mut SearchTrigger, rx: &mut UnboundedReceiver<FiredQuery>) -> Vec<SearchRequest> {
        let mut requests = Vec::new();
        while let Ok(fired) = rx.try_recv() {
            requests.extend(trigger.fire(fired));
        }
        requests
    }

    #[tokio::test(start_paused = true)]
    async fn burst_issues_one_request_with_last_value() {
        let (mut trigger, mut rx) = trigger();

        trigger.on_input_change("a");
        wait(100).await;
        trigger.on_input_change("ab");
        assert_eq!(trigger.state(), TriggerState::Waiting);
        wait(299).await;
        assert!(drain(&mut trigger, &mut rx).is_empty());
        wait(2).await;

        let requests = drain(&mut trigger, &mut rx);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.as_str(), "ab");
        assert_eq!(requests[0].seq, 1);
        assert_eq!(trigger.state(), TriggerState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn short_queries_never_issue_requests() {
        let (mut trigger, mut rx) = trigger();

        for raw in ["", "a", "  b  ", " "] {
            trigger.on_input_change(raw);
            wait(400).await;
        }

        assert!(drain(&mut trigger, &mut rx).is_empty());
        assert_eq!(trigger.last_issued(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn request_carries_trimmed_query() {
        let (mut trigger, mut rx) = trigger();

        trigger.on_input_change("  jo  ");

        let fired = rx.recv().await.unwrap();
        let requests: Vec<_> = trigger.fire(fired).into_iter().collect();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query.as_str(), "jo");
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_periods_issue_separate_requests() {
        let (mut trigger, mut rx) = trigger();

        trigger.on_input_change("xy");
        wait(400).await;
        let first = drain(&mut trigger, &mut rx);

        trigger.on_input_change("xyz");
        wait(400).await;
        let second = drain(&mut trigger, &mut rx);

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].query.as_str(), "xy");
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].query.as_str(), "xyz");
        assert!(trigger.is_latest(second[0].seq));
        assert!(!trigger.is_latest(first[0].seq));
    }

    #[tokio::test(start_paused = true)]
    async fn shrinking_below_minimum_cancels_pending_search() {
        let (mut trigger, mut rx) = trigger();

        trigger.on_input_change("ab");
        wait(100).await;
        trigger.on_input_change("a");
        wait(500).await;

        assert!(drain(&mut trigger, &mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_trigger_stays_idle() {
        let (mut trigger, mut rx) = trigger();

        trigger.on_input_change("abc");
        assert!(trigger.cancel());
        wait(500).await;

        assert!(drain(&mut trigger, &mut rx).is_empty());
        assert_eq!(trigger.state(), TriggerState::Idle);
    }
}
