//! Search worker implementation.
//!
//! The worker receives [`WorkerMessage`]s over a tokio channel and runs each
//! search on its own task, so a slow request never delays a later one and
//! replies may arrive in any order. Requests are never cancelled once issued.

use crate::domain::error::{LiveSearchError, Result};
use crate::search::SearchBackend;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Executes search messages against a [`SearchBackend`].
#[derive(Clone)]
pub struct SearchWorker {
    backend: Arc<dyn SearchBackend>,
}

impl SearchWorker {
    #[must_use]
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Processes one message and returns its response.
    ///
    /// Failures are logged at error level and turned into
    /// [`WorkerResponse::SearchFailed`]; they never escape as errors.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = "Search");
        if let Some(parent) = message.trace_context().and_then(|c| c.to_otel_context()) {
            span.set_parent(parent);
        }

        match message {
            WorkerMessage::Search { seq, query, .. } => {
                self.handle_search(seq, query).instrument(span).await
            }
        }
    }

    async fn handle_search(&self, seq: u64, query: crate::domain::SearchQuery) -> WorkerResponse {
        match self.backend.search(&query).await {
            Ok(users) => {
                tracing::debug!(seq, query = %query, user_count = users.len(), "search completed");
                WorkerResponse::SearchCompleted {
                    seq,
                    query,
                    users,
                    completed_at: chrono::Utc::now().timestamp_millis(),
                }
            }
            Err(e) => {
                tracing::error!(seq, query = %query, error = %e, "Search error");
                WorkerResponse::SearchFailed {
                    seq,
                    query,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Starts the worker loop on the current runtime.
    ///
    /// Responses are delivered on `responses`. The loop ends when every
    /// [`WorkerHandle`] sender is dropped or [`WorkerHandle::shutdown`] is called;
    /// searches already in flight still deliver their responses.
    #[must_use]
    pub fn spawn(self, responses: UnboundedSender<WorkerResponse>) -> WorkerHandle {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(receiver, responses));
        WorkerHandle { sender, task }
    }

    async fn run(
        self,
        mut receiver: UnboundedReceiver<WorkerMessage>,
        responses: UnboundedSender<WorkerResponse>,
    ) {
        tracing::debug!("search worker started");

        while let Some(message) = receiver.recv().await {
            let worker = self.clone();
            let responses = responses.clone();
            tokio::spawn(async move {
                let response = worker.handle_message(message).await;
                if responses.send(response).is_err() {
                    tracing::debug!("event loop gone, dropping search response");
                }
            });
        }

        tracing::debug!("search worker stopped");
    }
}

impl std::fmt::Debug for SearchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchWorker").finish_non_exhaustive()
    }
}

/// Handle to a running [`SearchWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    sender: UnboundedSender<WorkerMessage>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queues a message for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`LiveSearchError::Worker`] if the worker loop has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        self.sender
            .send(message)
            .map_err(|e| LiveSearchError::Worker(format!("search worker is not running: {e}")))
    }

    /// Stops accepting messages and waits for the worker loop to end.
    pub async fn shutdown(self) {
        drop(self.sender);
        if let Err(e) = self.task.await {
            tracing::debug!(error = %e, "search worker task ended abnormally");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SearchQuery, User};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Answers after a per-query delay; queries starting with `!` fail.
    struct SlowBackend;

    #[async_trait]
    impl SearchBackend for SlowBackend {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<User>> {
            let delay = if query.as_str() == "slow" { 500 } else { 50 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            if query.as_str().starts_with('!') {
                return Err(LiveSearchError::Io(std::io::Error::other("connection refused")));
            }
            Ok(vec![User::new(query.as_str(), "x@example.com", "1")])
        }
    }

    fn worker() -> SearchWorker {
        SearchWorker::new(Arc::new(SlowBackend))
    }

    #[tokio::test(start_paused = true)]
    async fn failures_become_failed_responses() {
        let response = worker()
            .handle_message(WorkerMessage::search(4, SearchQuery::from_raw("!x")))
            .await;

        match response {
            WorkerResponse::SearchFailed { seq, query, message } => {
                assert_eq!(seq, 4);
                assert_eq!(query.as_str(), "!x");
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn later_fast_request_is_not_blocked_by_earlier_slow_one() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = worker().spawn(tx);

        handle.post(WorkerMessage::search(1, SearchQuery::from_raw("slow"))).unwrap();
        handle.post(WorkerMessage::search(2, SearchQuery::from_raw("fast"))).unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.seq(), 2);
        assert_eq!(second.seq(), 1);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn in_flight_requests_finish_after_shutdown() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = worker().spawn(tx);

        handle.post(WorkerMessage::search(7, SearchQuery::from_raw("slow"))).unwrap();
        tokio::task::yield_now().await;
        handle.shutdown().await;

        let response = rx.recv().await.expect("in-flight search still answers");
        assert_eq!(response.seq(), 7);
    }
}
