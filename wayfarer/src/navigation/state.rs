//! Mutable router state: the active route, its params and the token of the
//! newest navigation.

use std::{cell::Cell, fmt, rc::Rc};
use wayfarer_core::{
    Document, Params, RouteDefinition, RouteErrorKind, RouteKey, RoutingError,
};

/// Identifies one navigation. Tokens only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct NavigationToken(u64);

impl fmt::Display for NavigationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out tokens and remembers the newest one.
#[derive(Debug, Default)]
pub(crate) struct TokenCounter {
    latest: Cell<u64>,
}

impl TokenCounter {
    /// Mint a token, making every earlier one stale.
    pub(crate) fn mint(&self) -> NavigationToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        NavigationToken(next)
    }

    /// Whether `token` is still the newest.
    pub(crate) fn is_current(&self, token: NavigationToken) -> bool {
        self.latest.get() == token.0
    }
}

/// The resolved route a navigation committed to.
///
/// Cloning is cheap: every field is a handle.
pub(crate) struct ActiveRoute<D: Document> {
    pub(crate) key: RouteKey,
    pub(crate) definition: Rc<RouteDefinition<D>>,
    pub(crate) template: D::Template,
    pub(crate) content: Rc<D::Fragment>,
}

impl<D: Document> Clone for ActiveRoute<D> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            definition: Rc::clone(&self.definition),
            template: self.template.clone(),
            content: Rc::clone(&self.content),
        }
    }
}

pub(crate) struct NavigationState<D: Document> {
    active: Option<ActiveRoute<D>>,
    params: Params,
    initialized: bool,
}

impl<D: Document> NavigationState<D> {
    pub(crate) fn new() -> Self {
        Self {
            active: None,
            params: Params::new(),
            initialized: false,
        }
    }

    /// The active route, failing with `RouteDataNotSet` before the first
    /// navigation resolved one.
    pub(crate) fn active(&self) -> Result<&ActiveRoute<D>, RoutingError> {
        self.active.as_ref().ok_or_else(|| {
            RoutingError::new(
                RouteErrorKind::RouteDataNotSet,
                "read route data",
                "No route has been resolved yet.",
            )
        })
    }

    /// The active route's key, failing with `RouteIdNotSet` before the first
    /// navigation.
    pub(crate) fn route_key(&self) -> Result<&RouteKey, RoutingError> {
        self.active.as_ref().map(|active| &active.key).ok_or_else(|| {
            RoutingError::new(
                RouteErrorKind::RouteIdNotSet,
                "read route id",
                "The current route id is not set.",
            )
        })
    }

    pub(crate) fn is_active(&self, key: &RouteKey) -> bool {
        self.route_key().is_ok_and(|current| current == key)
    }

    pub(crate) fn params(&self) -> &Params {
        &self.params
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn commit(&mut self, active: ActiveRoute<D>, params: Params) {
        self.active = Some(active);
        self.params = params;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}
