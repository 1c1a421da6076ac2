//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every request on its way through the
//! server. Only tracing lives here today.

pub mod trace;

pub use trace::trace;
