//! Observability for Pagebot: subscriber setup and shared span/field names.

pub mod attrs;
pub mod tracing_setup;
