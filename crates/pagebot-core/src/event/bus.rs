//! Fan-out of [`ConversationEvent`]s to renderers.
//!
//! The conversation actor and the widget both hold a clone of one bus, so a
//! subscriber sees message, typing and visibility changes in a single
//! ordered stream. Slow subscribers lag (tokio broadcast semantics) rather
//! than stall the actor.

use pagebot_types::event::ConversationEvent;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ConversationEvent>,
}

impl EventBus {
    /// Bus buffering up to `capacity` events per subscriber. Zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Receiver for events published from now on. Earlier events are not replayed;
    /// read the controller snapshot for current state.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.tx.subscribe()
    }

    /// Send to every live subscriber. Nobody listening is not an error.
    pub fn publish(&self, event: ConversationEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("conversation event dropped, no subscribers");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
