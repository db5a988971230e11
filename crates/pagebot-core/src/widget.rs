//! The embeddable chat widget: panel visibility plus one conversation.
//!
//! A `ChatWidget` is an explicit instance owned by whatever renders it.
//! Closing the panel only hides it; the conversation keeps running and the
//! history is there on reopen. Dropping or shutting down the widget is the
//! unmount, and that cancels any reply still in flight.

use pagebot_types::config::WidgetConfig;
use pagebot_types::error::{ConfigError, SubmitError};
use pagebot_types::event::ConversationEvent;
use pagebot_types::widget::{WidgetAction, WidgetVisibility};
use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use crate::conversation::{ConversationController, ConversationSnapshot};

#[derive(Debug)]
pub struct ChatWidget {
    visibility: WidgetVisibility,
    conversation: ConversationController,
}

impl ChatWidget {
    /// Wrap a running conversation. The panel starts closed.
    pub fn new(conversation: ConversationController) -> Self {
        Self {
            visibility: WidgetVisibility::default(),
            conversation,
        }
    }

    /// Build a widget with randomized latency from `config`.
    pub fn from_config(config: &WidgetConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        Ok(Self::new(ConversationController::from_config(config, seed)?))
    }

    pub fn visibility(&self) -> WidgetVisibility {
        self.visibility
    }

    /// Apply a chrome action and publish the change, if any.
    pub fn apply(&mut self, action: WidgetAction) -> WidgetVisibility {
        let next = self.visibility.apply(action);
        if next != self.visibility {
            info!(from = %self.visibility, to = %next, "widget visibility changed");
            self.visibility = next;
            self.conversation
                .events()
                .publish(ConversationEvent::VisibilityChanged { visibility: next });
        }
        next
    }

    pub fn open(&mut self) -> WidgetVisibility {
        self.apply(WidgetAction::Open)
    }

    pub fn toggle_minimize(&mut self) -> WidgetVisibility {
        self.apply(WidgetAction::ToggleMinimize)
    }

    pub fn close(&mut self) -> WidgetVisibility {
        self.apply(WidgetAction::Close)
    }

    pub async fn submit(&self, text: impl Into<String>) -> Result<Uuid, SubmitError> {
        self.conversation.submit(text).await
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        self.conversation.snapshot()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.conversation.subscribe()
    }

    pub fn conversation(&self) -> &ConversationController {
        &self.conversation
    }

    /// Unmount: cancel the conversation and wait for it to stop.
    pub async fn shutdown(self) {
        self.conversation.shutdown().await;
    }
}
