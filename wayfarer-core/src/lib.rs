//! # wayfarer-core
//!
//! Core types and collaborator traits for the wayfarer navigation engine.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! document and history bindings that don't need the full engine.
//!
//! # Building Blocks
//!
//! ## Path templates ([`PathTemplate`])
//!
//! A route's path: static text with named parameters. Templates build
//! concrete URLs from [`Params`] and read params back out of a pathname.
//! Routes are told apart by [`PathTemplate::first_segment`] only.
//!
//! ## Route definitions ([`RouteDefinition`], [`GlobalHooks`])
//!
//! A path plus optional lifecycle hooks and an opaque custom context.
//! Global hooks fire for every route, before the route's own hook.
//!
//! ## Hooks ([`RouteHook`], [`GlobalHook`])
//!
//! Callables keyed by [`LifecyclePhase`]. Plain closures qualify.
//!
//! ## Collaborators ([`Document`], [`History`], [`Navigator`])
//!
//! The platform surface the engine drives, and the surface hooks use to
//! navigate.
//!
//! # Error Types
//!
//! - [`RoutingError`] - A classified routing failure
//! - [`NavigationError`] - Why a navigation ended early
//! - [`BoxError`] - What hooks return on failure

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod document;
mod error;
mod history;
mod hook;
mod navigator;
mod params;
mod path;
mod route;

// Re-exports
pub use context::{GlobalHookContext, RouteHookContext};
pub use document::{Document, OutletMarker};
pub use error::{BoxError, NavigationError, RouteErrorKind, RoutingError};
pub use history::{History, HistoryState};
pub use hook::{GlobalHook, HookResult, HookSet, LifecyclePhase, RouteHook};
pub use navigator::{Navigator, RouterResult};
pub use params::Params;
pub use path::{PATH_SEPARATOR, ParamSlot, PathTemplate, page_name};
pub use route::{GlobalHooks, PAGE_NOT_FOUND, RouteDefinition, RouteKey, RouteKind};
