//! Shared domain types for Pagebot.
//!
//! This crate contains the types exchanged between the conversation engine
//! and whatever hosts it: chat messages, intents, widget visibility,
//! conversation events, configuration and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod event;
pub mod intent;
pub mod message;
pub mod widget;
