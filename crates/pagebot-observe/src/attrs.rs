//! Names used when instrumenting the widget.
//!
//! Kept in one place so log queries and OTel dashboards agree on spelling.

/// Service / tracer name.
pub const SERVICE_NAME: &str = "pagebot";

/// One interactive session of the terminal host.
pub const SPAN_SESSION: &str = "pagebot.session";

/// One user turn, from submit to reply.
pub const SPAN_TURN: &str = "pagebot.turn";
