//! Keyword-based intent classification.
//!
//! The rule table in [`rules`] is the whole of the assistant's
//! "understanding"; [`classifier`] walks it in priority order.

pub mod classifier;
pub mod rules;

pub use classifier::{classify, classify_with};
pub use rules::{IntentRule, INTENT_RULES};
