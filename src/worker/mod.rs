//! Background worker for asynchronous search requests.
//!
//! This module implements the worker that performs all HTTP searches off the
//! event loop. Messages travel over tokio channels and carry a distributed
//! tracing context so spans link across the task boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{SearchWorker, WorkerHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
