//! # wayfarer - In-Page Client Navigation
//!
//! `wayfarer` swaps page content inside a single outlet according to a
//! declarative route configuration, keeps the session history in sync, and
//! runs per-route and global lifecycle hooks around every swap.
//!
//! The engine is platform-neutral: it drives a [`Document`] (templates and
//! the outlet) and a [`History`]. Browser bindings implement those traits
//! over the DOM; [`memory`] implements them over plain values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wayfarer::prelude::*;
//! use wayfarer::memory::{MemoryDocument, MemoryHistory};
//!
//! let document = MemoryDocument::new()
//!     .route_template("home", "<h1>Home</h1>")
//!     .route_template("users", "<h1>User</h1>")
//!     .fallback_template("PageNotFound", "<h1>Not found</h1>");
//!
//! let router = RouteManager::new(document, MemoryHistory::new("/"));
//! router.load_route_config(
//!     RouteConfig::new()
//!         .route("home", RouteDefinition::new(path!("/")))
//!         .route(
//!             "users",
//!             RouteDefinition::new(path!("/users/{username}")).on(
//!                 LifecyclePhase::Load,
//!                 |ctx| {
//!                     println!("loading {:?}", ctx.params().get("username"));
//!                     Ok(())
//!                 },
//!             ),
//!         )
//!         .fallback("PageNotFound", RouteDefinition::new(path!("/404"))),
//! );
//!
//! router.initialize_route();
//! router.goto("users", Some(Params::from([("username", "Alice")])));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): navigation and failure logs through `tracing`
//! - `macros` (default): the compile-time [`path!`] macro
//! - `serde`: (de)serialization of [`Params`] and [`HistoryState`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod activation;
mod navigation;
mod options;

pub use activation::{Activation, ActivationTrigger, RouteLink};
pub use navigation::{NavigationFlags, RouteManager};
pub use options::{DEFAULT_ACTIVATION_KEYS, RouterOptions};

pub use wayfarer_core::{
    // Error types
    BoxError,
    // Collaborators
    Document,
    // Hooks
    GlobalHook,
    GlobalHookContext,
    // Routes
    GlobalHooks,
    History,
    HistoryState,
    HookResult,
    LifecyclePhase,
    NavigationError,
    Navigator,
    OutletMarker,
    PAGE_NOT_FOUND,
    // Paths
    ParamSlot,
    Params,
    PathTemplate,
    RouteDefinition,
    RouteErrorKind,
    RouteHook,
    RouteHookContext,
    RouteKey,
    RouteKind,
    RouterResult,
    RoutingError,
    page_name,
};

// Registry
pub use wayfarer_std::registry::{RouteConfig, RouteRegistry, RouteTable};

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use wayfarer_std::hooks::*;
}

/// In-memory document and history.
pub mod memory {
    #![allow(clippy::wildcard_imports)]
    pub use wayfarer_std::memory::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use wayfarer_std::testing::*;
}

/// Prelude module - common imports for wayfarer.
///
/// # Usage
///
/// ```rust,ignore
/// use wayfarer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Activation, ActivationTrigger, GlobalHookContext, GlobalHooks, HookResult, LifecyclePhase,
        Navigator, Params, PathTemplate, RouteConfig, RouteDefinition, RouteHookContext,
        RouteLink, RouteManager, RouterOptions, RouterResult,
    };

    #[cfg(feature = "macros")]
    pub use crate::path;
}

#[cfg(feature = "macros")]
pub use wayfarer_macros::path;
