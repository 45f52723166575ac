//! Deck-loading worker.
//!
//! File reads run on Zellij's worker thread so a slow or large deck never
//! blocks rendering. The worker is stateless: every [`WorkerMessage`] is
//! answered with exactly one [`WorkerResponse`].
//!
//! The `ZellijWorker` glue that receives raw payloads and posts replies lives in
//! the plugin binary; this type only turns messages into responses.

use crate::storage::{DeckSource, JsonDeckFile};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Worker thread state.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeckWorker;

impl DeckWorker {
    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Loads a deck from any source.
    fn load_from(source: &dyn DeckSource) -> WorkerResponse {
        match source.load() {
            Ok(payload) => {
                let (name, cards) = payload.into_parts();
                tracing::debug!(
                    source = %source.describe(),
                    card_count = cards.len(),
                    "deck read"
                );
                WorkerResponse::DeckLoaded { name, cards }
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "deck read failed");
                WorkerResponse::Error {
                    message: format!("{}: {e}", source.describe()),
                }
            }
        }
    }

    /// Processes a worker message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadDeck { path, .. } => Self::load_from(&JsonDeckFile::new(path)),
        }
    }

    /// Decodes a raw JSON payload, handles it, and encodes the reply.
    ///
    /// Returns `None` only if the reply cannot be serialized. A payload that is
    /// not a valid message is answered with [`WorkerResponse::Error`].
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let response = match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker message: {e}"),
                }
            }
        };

        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
