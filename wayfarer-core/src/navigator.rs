//! # Navigator
//!
//! The surface hooks use to navigate, and the result every public router
//! call returns.

use crate::params::Params;
use std::fmt;

/// Outcome of a public router call. Router calls never panic or propagate
/// errors; failures come back here with `success == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterResult {
    /// Whether the call did what was asked.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl RouterResult {
    /// A successful outcome.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for RouterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "ok" } else { "failed" };
        write!(f, "{status}: {}", self.message)
    }
}

/// Programmatic navigation.
///
/// Implemented by the router; hooks reach it through their context.
pub trait Navigator {
    /// Navigate to a normal route.
    fn goto(&self, route_id: &str, params: Option<Params>) -> RouterResult;

    /// Navigate to a fallback route.
    fn goto_fallback(&self, fallback_id: &str, params: Option<Params>) -> RouterResult;
}
