//! Worker message types for communication with the search worker.
//!
//! This module defines the request and response protocol between the event loop
//! and the background worker that performs HTTP searches. It also carries the
//! distributed tracing context across the task boundary, so a request span links
//! to the event span that issued it.

use crate::domain::{SearchQuery, User};
use crate::trigger::SearchRequest;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is the case
    /// whenever no OpenTelemetry layer is installed.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("span context is not valid");
            return None;
        }

        let trace_id = format!("{:032x}", span_context.trace_id());
        let parent_span_id = format!("{:016x}", span_context.span_id());

        tracing::trace!(
            trace_id = %trace_id,
            parent_span_id = %parent_span_id,
            "capturing trace context"
        );

        Some(Self {
            trace_id,
            parent_span_id,
        })
    }

    /// Rebuilds a remote OpenTelemetry context from the captured IDs.
    ///
    /// Returns `None` if either ID is not valid hex.
    #[must_use]
    pub fn to_otel_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

/// Generates builder methods for `WorkerMessage` variants.
///
/// Each builder attaches the current trace context to the message.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    search(Search { seq: u64, query: SearchQuery }),
}

/// Messages sent from the event loop to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Run one search request.
    Search {
        /// Sequence number of the request, echoed in the response.
        seq: u64,

        /// Trimmed query to search for.
        query: SearchQuery,

        /// Trace context for linking spans across tasks.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a search message from an issued request.
    #[must_use]
    pub fn from_request(request: SearchRequest) -> Self {
        Self::search(request.seq, request.query)
    }

    /// Trace context attached to this message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Search { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the event loop.
///
/// Each variant echoes the sequence number of the request it answers, so the
/// event loop can tell current replies from stale ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The search returned a result set (possibly empty).
    SearchCompleted {
        /// Sequence number of the answered request.
        seq: u64,

        /// Query the request was issued for.
        query: SearchQuery,

        /// Users in server order.
        users: Vec<User>,

        /// Completion time, milliseconds since the Unix epoch.
        completed_at: i64,
    },

    /// The search failed; already logged by the worker.
    SearchFailed {
        /// Sequence number of the failed request.
        seq: u64,

        /// Query the request was issued for.
        query: SearchQuery,

        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        match self {
            Self::SearchCompleted { seq, .. } | Self::SearchFailed { seq, .. } => *seq,
        }
    }
}
