//! # wayfarer-std
//!
//! Standard implementations for the wayfarer navigation engine.
//!
//! This crate provides:
//! - **Route registry**: [`RouteConfig`](registry::RouteConfig),
//!   [`RouteRegistry`](registry::RouteRegistry)
//! - **In-memory collaborators**: [`MemoryDocument`](memory::MemoryDocument),
//!   [`MemoryHistory`](memory::MemoryHistory)
//! - **Standard hooks**: Logging, Tracing, Conditional
//! - **Testing utilities**: [`PhaseRecorder`](testing::PhaseRecorder),
//!   [`CountingHook`](testing::CountingHook)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use wayfarer_core;

// Modules
pub mod hooks;
pub mod memory;
pub mod registry;
pub mod testing;
