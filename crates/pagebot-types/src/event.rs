//! Event types for the conversation event bus.
//!
//! `ConversationEvent` is broadcast by the conversation actor and the widget
//! so a presentation layer can render incrementally instead of diffing
//! snapshots. All variants are Clone + Send + Sync for tokio broadcast.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::intent::Intent;
use crate::message::ChatMessage;
use crate::widget::WidgetVisibility;

/// Events emitted while a conversation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A message was appended to the log (user or bot).
    MessageAppended { message: ChatMessage },

    /// The typing indicator was switched on or off.
    TypingChanged { typing: bool },

    /// A bot reply finished a turn.
    TurnCompleted {
        intent: Intent,
        user_message_id: Uuid,
        bot_message_id: Uuid,
    },

    /// The widget panel changed visibility.
    VisibilityChanged { visibility: WidgetVisibility },
}
