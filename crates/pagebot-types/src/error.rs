use thiserror::Error;

use crate::intent::Intent;

/// Reasons a submission was not accepted.
///
/// None of these change conversation state; a host may treat them as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("a response is still being composed")]
    ResponsePending,

    #[error("conversation has been shut down")]
    Closed,
}

/// Errors from loading or validating widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} range: min {min_ms}ms must be below max {max_ms}ms")]
    InvalidDelayRange {
        name: &'static str,
        min_ms: u64,
        max_ms: u64,
    },

    #[error("response template for '{0}' is empty")]
    EmptyTemplate(Intent),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config read error: {0}")]
    Io(String),
}
