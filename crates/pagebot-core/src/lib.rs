//! Conversation engine for the Pagebot profile assistant.
//!
//! Everything the widget "knows" lives here: an ordered keyword rule table,
//! a set of canned responses, an injectable latency source and the actor
//! that drives one conversation. It depends only on `pagebot-types` plus
//! tokio for timers -- no network, no storage.

pub mod config;
pub mod conversation;
pub mod event;
pub mod intent;
pub mod latency;
pub mod response;
pub mod widget;
