//! Error types for wayfarer.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RoutingError`] - A classified routing failure with the place it was raised
//! - [`RouteErrorKind`] - The classification used in user-facing messages
//! - [`NavigationError`] - Everything that can end a navigation early, including
//!   supersession, which is a control signal rather than a failure

use crate::hook::LifecyclePhase;
use std::fmt;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Hooks return this so that user code can fail with any error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a routing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteErrorKind {
    /// The route configuration is missing or malformed.
    ConfigurationError,
    /// A route id was required but none was given.
    RouteIdNotSet,
    /// The requested route id is not in the registry.
    RouteIdNotFound,
    /// Route data was read before any route was resolved.
    RouteDataNotSet,
    /// The document has no template for the route.
    TemplateNotFound,
    /// The outlet element is missing.
    OutletNotFound,
    /// Anything not recognized above.
    UnknownError,
}

impl RouteErrorKind {
    /// The stable name of this kind, as shown in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationError => "ConfigurationError",
            Self::RouteIdNotSet => "RouteIdNotSet",
            Self::RouteIdNotFound => "RouteIdNotFound",
            Self::RouteDataNotSet => "RouteDataNotSet",
            Self::TemplateNotFound => "TemplateNotFound",
            Self::OutletNotFound => "OutletNotFound",
            Self::UnknownError => "UnknownError",
        }
    }
}

impl fmt::Display for RouteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified routing failure.
///
/// `place` names the operation that raised the error, so messages read like
/// `"goto: The specified route id is missing from the route map. (Error type: RouteIdNotFound)"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{place}: {message} (Error type: {kind})")]
pub struct RoutingError {
    kind: RouteErrorKind,
    place: &'static str,
    message: String,
}

impl RoutingError {
    /// Create a new routing error.
    pub fn new(kind: RouteErrorKind, place: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            place,
            message: message.into(),
        }
    }

    /// Shorthand for a [`RouteErrorKind::ConfigurationError`].
    pub fn configuration(place: &'static str, message: impl Into<String>) -> Self {
        Self::new(RouteErrorKind::ConfigurationError, place, message)
    }

    /// The classification of this error.
    pub fn kind(&self) -> RouteErrorKind {
        self.kind
    }

    /// Where the error was raised.
    pub fn place(&self) -> &'static str {
        self.place
    }

    /// The bare message, without place and kind decoration.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can end a navigation before it settles.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// A classified routing failure.
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// A lifecycle hook returned an error.
    #[error("{phase} hook failed: {source}")]
    Hook {
        /// The phase whose hook failed.
        phase: LifecyclePhase,
        /// The error returned by the hook.
        #[source]
        source: BoxError,
    },

    /// A newer navigation started while this one was running.
    #[error("navigation has been superseded")]
    Superseded,
}

impl NavigationError {
    /// Classify this error for user-facing results.
    ///
    /// Hook failures have no dedicated kind and are reported as
    /// [`RouteErrorKind::UnknownError`].
    pub fn kind(&self) -> RouteErrorKind {
        match self {
            Self::Routing(err) => err.kind(),
            Self::Hook { .. } | Self::Superseded => RouteErrorKind::UnknownError,
        }
    }

    /// Whether this is the supersession control signal.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}
