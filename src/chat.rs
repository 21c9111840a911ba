//! Conversation orchestration
//!
//! [`ChatService`] is the caller-facing wrapper around the pure responder:
//! it owns persistence of the exchange and the input guards the engine
//! deliberately does not have. The engine itself stays total and stateless;
//! declining empty input and surfacing a supportive fallback on internal
//! failure both live here.

use tracing::warn;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ChatMessage, Sender};
use crate::responder::Responder;
use crate::store::JournalStore;
use crate::templates::WELCOME_MESSAGE;
use crate::validation::{InputValidator, MAX_TEXT_LENGTH};

/// Store-backed conversation service
pub struct ChatService {
    store: JournalStore,
    responder: Responder,
    metrics: MetricsCollector,
    max_message_chars: usize,
}

impl ChatService {
    /// Create a service over the given store and responder.
    ///
    /// An empty conversation is seeded with the fixed welcome message.
    pub fn new(store: JournalStore, responder: Responder) -> Result<Self> {
        let service = Self {
            store,
            responder,
            metrics: MetricsCollector::default(),
            max_message_chars: MAX_TEXT_LENGTH,
        };
        service.ensure_welcome()?;
        Ok(service)
    }

    /// Override the input length above which messages are truncated
    #[must_use]
    pub fn with_message_limit(mut self, max_message_chars: usize) -> Self {
        self.max_message_chars = max_message_chars;
        self
    }

    fn ensure_welcome(&self) -> Result<()> {
        if self.store.list_messages()?.is_empty() {
            self.store.append_message(WELCOME_MESSAGE, Sender::Assistant)?;
        }
        Ok(())
    }

    /// Handle one user message and return the assistant's reply.
    ///
    /// Empty or whitespace-only input is declined with `None`; this guard
    /// belongs to the service, not the engine. Both sides of the exchange
    /// are appended to the chat history. A storage failure is logged and
    /// the reply is still returned, so the user never sees a raw error.
    #[must_use]
    pub fn send(&self, text: &str) -> Option<String> {
        let sanitized = InputValidator::sanitize_text(text);
        if sanitized.is_empty() {
            return None;
        }

        // Oversized input is truncated rather than rejected; free text is
        // never an error from the user's point of view.
        let message = if sanitized.len() > self.max_message_chars {
            warn!(length = sanitized.len(), "Truncating oversized chat message");
            truncate_at_boundary(&sanitized, self.max_message_chars)
        } else {
            sanitized
        };

        if let Err(err) = self.store.append_message(&message, Sender::User) {
            warn!(error = %err, "Failed to persist user message");
            self.metrics.record_error("storage", "append_user_message");
        }

        let reply = self.responder.respond(&message);

        if let Err(err) = self.store.append_message(&reply, Sender::Assistant) {
            warn!(error = %err, "Failed to persist assistant reply");
            self.metrics.record_error("storage", "append_assistant_reply");
        }

        Some(reply)
    }

    /// The full chat history in append order
    pub fn history(&self) -> Result<Vec<ChatMessage>> {
        self.store.list_messages()
    }

    /// Clear the chat history and re-seed the welcome message
    pub fn reset(&self) -> Result<()> {
        self.store.reset_conversation()?;
        self.ensure_welcome()
    }

    /// Access the underlying journal store
    #[must_use]
    pub fn store(&self) -> &JournalStore {
        &self.store
    }
}

fn truncate_at_boundary(text: &str, max_bytes: usize) -> String {
    let mut end = max_bytes.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
