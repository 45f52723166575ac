//! Background worker for deck file loading.
//!
//! This module implements the worker side of deck loading so file I/O never
//! blocks the plugin UI thread. Messages carry a trace context so worker spans
//! join the plugin trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Message processing logic

pub mod handler;
pub mod messages;

pub use handler::DeckWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
