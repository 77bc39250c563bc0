//! Standard lifecycle hooks.
//!
//! - [`LoggingHook`] - logs every phase it sees
//! - [`TracingHook`] - runs an inner hook inside a `tracing` span
//! - [`ConditionalHook`] - runs an inner global hook only for matching routes

pub mod conditional;
pub mod logging;
pub mod tracing;

pub use conditional::ConditionalHook;
pub use logging::LoggingHook;
pub use self::tracing::TracingHook;
