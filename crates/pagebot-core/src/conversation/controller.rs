//! The conversation actor and its handle.
//!
//! One tokio task owns the [`Conversation`], the response catalog and the
//! delay source. Callers talk to it through [`ConversationController`]:
//! submissions travel over an mpsc channel, state comes back through a
//! `watch` snapshot and a broadcast [`EventBus`]. The task multiplexes
//! commands, the typing timer, the delivery timer and its cancellation
//! token in a single `select!`, so there is exactly one writer and no lock.

use std::time::Duration;

use pagebot_types::config::{TimingMode, WidgetConfig};
use pagebot_types::error::{ConfigError, SubmitError};
use pagebot_types::event::ConversationEvent;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use super::state::{Conversation, ConversationSnapshot};
use crate::event::EventBus;
use crate::latency::{DelaySource, RandomLatency};
use crate::response::ResponseCatalog;

/// Commands queued for the actor. Only one submission is processed at a
/// time; the channel just buffers callers.
const COMMAND_BUFFER: usize = 16;

enum Command {
    Submit {
        text: String,
        reply: oneshot::Sender<Result<Uuid, SubmitError>>,
    },
}

/// Handle to a running conversation.
///
/// Must be created inside a tokio runtime. Dropping the handle (or calling
/// [`shutdown`](Self::shutdown)) cancels the actor together with any pending
/// timers, so no reply can land after teardown.
pub struct ConversationController {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<ConversationSnapshot>,
    events: EventBus,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ConversationController {
    /// Spawn the actor with explicit parts.
    pub fn spawn<D: DelaySource>(
        greeting: impl Into<String>,
        catalog: ResponseCatalog,
        delays: D,
        timing: TimingMode,
        events: EventBus,
    ) -> Self {
        let conversation = Conversation::new(greeting);
        let (state_tx, state_rx) = watch::channel(conversation.snapshot());
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
        let cancel = CancellationToken::new();

        let actor = ConversationActor {
            conversation,
            catalog,
            delays,
            timing,
            events: events.clone(),
            state: state_tx,
            typing_deadline: None,
            delivery_deadline: None,
            deferred_delivery: None,
        };
        let task = tokio::spawn(actor.run(commands_rx, cancel.clone()));

        Self {
            commands: commands_tx,
            state: state_rx,
            events,
            cancel,
            task: Some(task),
        }
    }

    /// Spawn from a widget config with randomized latency.
    ///
    /// `seed` makes the latency sequence reproducible.
    pub fn from_config(config: &WidgetConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let delays = RandomLatency::from_config(config, seed)?;
        Self::from_config_with_delays(config, delays)
    }

    /// Spawn from a widget config with a caller-supplied delay source.
    pub fn from_config_with_delays<D: DelaySource>(
        config: &WidgetConfig,
        delays: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = ResponseCatalog::from_config(config)?;
        Ok(Self::spawn(
            config.greeting.clone(),
            catalog,
            delays,
            config.timing_mode,
            EventBus::new(config.event_capacity),
        ))
    }

    /// Submit a user utterance.
    ///
    /// Returns the id of the appended user message. Blank text, a turn still
    /// in flight, or a shut-down conversation are rejected with no effect.
    pub async fn submit(&self, text: impl Into<String>) -> Result<Uuid, SubmitError> {
        if self.cancel.is_cancelled() {
            return Err(SubmitError::Closed);
        }
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Submit {
                text: text.into(),
                reply,
            })
            .await
            .map_err(|_| SubmitError::Closed)?;
        rx.await.map_err(|_| SubmitError::Closed)?
    }

    /// Current messages, typing flag and composing flag.
    pub fn snapshot(&self) -> ConversationSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn watch(&self) -> watch::Receiver<ConversationSnapshot> {
        self.state.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel the actor without waiting. Later submissions return
    /// `SubmitError::Closed`; the last snapshot stays readable.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel the actor and wait for it to stop.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for ConversationController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for ConversationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ConversationController")
            .field("messages", &state.messages.len())
            .field("typing", &state.typing)
            .field("composing", &state.composing)
            .field("shut_down", &self.cancel.is_cancelled())
            .finish()
    }
}

struct ConversationActor<D> {
    conversation: Conversation,
    catalog: ResponseCatalog,
    delays: D,
    timing: TimingMode,
    events: EventBus,
    state: watch::Sender<ConversationSnapshot>,
    typing_deadline: Option<Instant>,
    delivery_deadline: Option<Instant>,
    /// Sequential mode: delivery delay drawn at submit, armed when typing ends.
    deferred_delivery: Option<Duration>,
}

impl<D: DelaySource> ConversationActor<D> {
    async fn run(mut self, mut commands: mpsc::Receiver<Command>, cancel: CancellationToken) {
        loop {
            let typing_at = self.typing_deadline;
            let delivery_at = self.delivery_deadline;

            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    debug!(
                        composing = self.conversation.is_composing(),
                        "conversation cancelled"
                    );
                    break;
                }

                () = sleep_until(typing_at.unwrap_or_else(Instant::now)),
                    if typing_at.is_some() =>
                {
                    self.on_typing_elapsed();
                }

                () = sleep_until(delivery_at.unwrap_or_else(Instant::now)),
                    if delivery_at.is_some() =>
                {
                    self.on_delivery_elapsed();
                }

                command = commands.recv() => match command {
                    Some(Command::Submit { text, reply }) => {
                        let result = self.submit(text);
                        let _ = reply.send(result);
                    }
                    None => break,
                },
            }
        }
    }

    fn submit(&mut self, text: String) -> Result<Uuid, SubmitError> {
        let message = match self.conversation.begin_turn(&text) {
            Ok(message) => message.clone(),
            Err(err) => {
                debug!(error = %err, "submission rejected");
                return Err(err);
            }
        };

        let typing = self.delays.typing_delay();
        let delivery = self.delays.delivery_delay();
        let now = Instant::now();
        self.typing_deadline = Some(now + typing);
        match self.timing {
            TimingMode::Overlapping => self.delivery_deadline = Some(now + delivery),
            TimingMode::Sequential => self.deferred_delivery = Some(delivery),
        }

        debug!(
            message_id = %message.id,
            typing_ms = typing.as_millis() as u64,
            delivery_ms = delivery.as_millis() as u64,
            timing = ?self.timing,
            "turn started"
        );

        let id = message.id;
        self.events.publish(ConversationEvent::MessageAppended { message });
        self.events
            .publish(ConversationEvent::TypingChanged { typing: true });
        self.publish_state();
        Ok(id)
    }

    fn on_typing_elapsed(&mut self) {
        self.typing_deadline = None;

        match self.timing {
            TimingMode::Overlapping => {
                if self.conversation.stop_typing() {
                    self.events
                        .publish(ConversationEvent::TypingChanged { typing: false });
                    self.publish_state();
                }
            }
            TimingMode::Sequential => {
                if let Some(delivery) = self.deferred_delivery.take() {
                    self.delivery_deadline = Some(Instant::now() + delivery);
                }
            }
        }
    }

    fn on_delivery_elapsed(&mut self) {
        self.delivery_deadline = None;
        // The reply ends the turn; a stale typing timer must not touch the next one.
        self.typing_deadline = None;
        self.deferred_delivery = None;

        let Some(pending) = self.conversation.pending() else {
            return;
        };
        let (intent, text) = self.catalog.reply_to(&pending.utterance);
        let text = text.to_string();
        let was_typing = self.conversation.typing();

        let Some((turn, reply)) = self.conversation.complete_turn(text) else {
            return;
        };
        let reply = reply.clone();

        debug!(
            message_id = %reply.id,
            intent = %intent,
            "turn completed"
        );

        let bot_message_id = reply.id;
        self.events
            .publish(ConversationEvent::MessageAppended { message: reply });
        if was_typing {
            self.events
                .publish(ConversationEvent::TypingChanged { typing: false });
        }
        self.events.publish(ConversationEvent::TurnCompleted {
            intent,
            user_message_id: turn.user_message_id,
            bot_message_id,
        });
        self.publish_state();
    }

    fn publish_state(&self) {
        self.state.send_replace(self.conversation.snapshot());
    }
}
