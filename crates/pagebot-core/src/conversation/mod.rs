//! Conversation state and the actor that advances it.

pub mod controller;
pub mod state;

pub use controller::ConversationController;
pub use state::{Conversation, ConversationSnapshot, PendingTurn};
