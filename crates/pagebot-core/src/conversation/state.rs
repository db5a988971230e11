//! Conversation state: the message log, the typing flag and the one
//! outstanding turn.
//!
//! `Conversation` is plain synchronous state with no timers. The controller
//! actor owns one and decides when each transition happens.

use pagebot_types::error::SubmitError;
use pagebot_types::message::ChatMessage;
use serde::Serialize;
use uuid::Uuid;

/// A user turn waiting for its bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub user_message_id: Uuid,
    /// The raw text as submitted, classified when the reply is delivered.
    pub utterance: String,
}

/// Read-only copy of the conversation handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSnapshot {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
    /// A reply is outstanding; submissions are rejected until it lands.
    pub composing: bool,
}

impl ConversationSnapshot {
    pub fn can_submit(&self) -> bool {
        !self.composing
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// Append-only message log plus turn bookkeeping.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    typing: bool,
    pending: Option<PendingTurn>,
}

impl Conversation {
    /// Start a conversation seeded with a single bot greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::bot(greeting)],
            typing: false,
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn typing(&self) -> bool {
        self.typing
    }

    pub fn is_composing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingTurn> {
        self.pending.as_ref()
    }

    /// Accept a user submission.
    ///
    /// Blank text and submissions during an outstanding turn are rejected
    /// without touching any state. On success the user message is appended,
    /// typing switches on and the turn becomes pending.
    pub fn begin_turn(&mut self, text: &str) -> Result<&ChatMessage, SubmitError> {
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }
        if self.pending.is_some() {
            return Err(SubmitError::ResponsePending);
        }

        let message = ChatMessage::user(text);
        self.pending = Some(PendingTurn {
            user_message_id: message.id,
            utterance: text.to_string(),
        });
        self.typing = true;
        self.messages.push(message);
        Ok(self.last())
    }

    /// Switch the typing indicator off. Returns whether it was on.
    pub fn stop_typing(&mut self) -> bool {
        std::mem::replace(&mut self.typing, false)
    }

    /// Deliver the bot reply for the pending turn.
    ///
    /// Returns `None` (and changes nothing) when no turn is pending.
    pub fn complete_turn(
        &mut self,
        reply: impl Into<String>,
    ) -> Option<(PendingTurn, &ChatMessage)> {
        let turn = self.pending.take()?;
        self.typing = false;
        self.messages.push(ChatMessage::bot(reply));
        Some((turn, self.last()))
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            messages: self.messages.clone(),
            typing: self.typing,
            composing: self.is_composing(),
        }
    }

    fn last(&self) -> &ChatMessage {
        // The log is seeded with the greeting and never shrinks.
        &self.messages[self.messages.len() - 1]
    }
}
