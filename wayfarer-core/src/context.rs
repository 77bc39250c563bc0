//! # Hook Contexts
//!
//! What a hook sees when it is called.
//!
//! - [`RouteHookContext`] - for per-route hooks: the raw template content, the
//!   fresh content clone, the route params and the route's custom context
//! - [`GlobalHookContext`] - for global hooks: the active route id and params
//!   and the global custom context
//!
//! Both carry the phase being fired and a [`Navigator`] through which a hook
//! may start a new navigation. Doing so supersedes the navigation that called
//! the hook: its remaining phases are skipped.

use crate::{
    document::Document, hook::LifecyclePhase, navigator::Navigator, params::Params,
    route::RouteKey,
};
use std::any::Any;

/// Context handed to a [`RouteHook`](crate::RouteHook).
pub struct RouteHookContext<'a, D: Document> {
    phase: LifecyclePhase,
    route: &'a RouteKey,
    template_content: &'a D::Template,
    cloned_content: &'a D::Fragment,
    params: &'a Params,
    custom_context: Option<&'a dyn Any>,
    navigator: &'a dyn Navigator,
}

impl<'a, D: Document> RouteHookContext<'a, D> {
    /// Assemble a context. Used by the navigation engine.
    pub fn new(
        phase: LifecyclePhase,
        route: &'a RouteKey,
        template_content: &'a D::Template,
        cloned_content: &'a D::Fragment,
        params: &'a Params,
        custom_context: Option<&'a dyn Any>,
        navigator: &'a dyn Navigator,
    ) -> Self {
        Self {
            phase,
            route,
            template_content,
            cloned_content,
            params,
            custom_context,
            navigator,
        }
    }

    /// The phase being fired.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The route this hook belongs to.
    pub fn route(&self) -> &RouteKey {
        self.route
    }

    /// The template as located in the document. Read-only.
    pub fn template_content(&self) -> &D::Template {
        self.template_content
    }

    /// The content instantiated for this navigation, about to be or just attached.
    pub fn cloned_content(&self) -> &D::Fragment {
        self.cloned_content
    }

    /// Route parameters.
    pub fn params(&self) -> &Params {
        self.params
    }

    /// The route's custom context, if it is a `T`.
    pub fn custom_context<T: Any>(&self) -> Option<&T> {
        self.custom_context?.downcast_ref()
    }

    /// Handle for re-entrant navigation.
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator
    }
}

/// Context handed to a [`GlobalHook`](crate::GlobalHook).
pub struct GlobalHookContext<'a> {
    phase: LifecyclePhase,
    route: &'a RouteKey,
    params: &'a Params,
    custom_context: Option<&'a dyn Any>,
    navigator: &'a dyn Navigator,
}

impl<'a> GlobalHookContext<'a> {
    /// Assemble a context. Used by the navigation engine.
    pub fn new(
        phase: LifecyclePhase,
        route: &'a RouteKey,
        params: &'a Params,
        custom_context: Option<&'a dyn Any>,
        navigator: &'a dyn Navigator,
    ) -> Self {
        Self {
            phase,
            route,
            params,
            custom_context,
            navigator,
        }
    }

    /// The phase being fired.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The id of the route passing through the phase.
    pub fn route_id(&self) -> &str {
        self.route.id()
    }

    /// The route passing through the phase, with its table.
    pub fn route(&self) -> &RouteKey {
        self.route
    }

    /// Route parameters.
    pub fn params(&self) -> &Params {
        self.params
    }

    /// The global custom context, if it is a `T`.
    pub fn custom_context<T: Any>(&self) -> Option<&T> {
        self.custom_context?.downcast_ref()
    }

    /// Handle for re-entrant navigation.
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator
    }
}
