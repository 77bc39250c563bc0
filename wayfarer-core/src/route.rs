//! Route identity and route definitions.

use crate::{
    context::{GlobalHookContext, RouteHookContext},
    document::Document,
    hook::{GlobalHook, HookResult, HookSet, LifecyclePhase, RouteHook},
    path::PathTemplate,
};
use std::{any::Any, fmt, rc::Rc};

/// The id every fallback table must contain.
pub const PAGE_NOT_FOUND: &str = "PageNotFound";

/// Which table a route id lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    /// A normal, directly navigable route.
    Route,
    /// A fallback route such as the not-found page.
    Fallback,
}

/// A route id qualified by its table.
///
/// A normal route and a fallback may share an id; they are still different
/// routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    kind: RouteKind,
    id: String,
}

impl RouteKey {
    /// Key for a normal route.
    pub fn route(id: impl Into<String>) -> Self {
        Self {
            kind: RouteKind::Route,
            id: id.into(),
        }
    }

    /// Key for a fallback route.
    pub fn fallback(id: impl Into<String>) -> Self {
        Self {
            kind: RouteKind::Fallback,
            id: id.into(),
        }
    }

    /// The route id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The table this id belongs to.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// Whether this is a fallback route.
    pub fn is_fallback(&self) -> bool {
        self.kind == RouteKind::Fallback
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RouteKind::Route => write!(f, "route '{}'", self.id),
            RouteKind::Fallback => write!(f, "fallback '{}'", self.id),
        }
    }
}

/// One entry of a route configuration: a path, hooks and a custom context.
///
/// # Example
///
/// ```rust,ignore
/// let users = RouteDefinition::new(path!("/users/{username}"))
///     .on(LifecyclePhase::Load, |ctx| {
///         println!("loading {:?}", ctx.params());
///         Ok(())
///     })
///     .with_context(UsersContext { page_size: 20 });
/// ```
pub struct RouteDefinition<D: Document> {
    path: PathTemplate,
    hooks: HookSet<dyn RouteHook<D>>,
    custom_context: Option<Rc<dyn Any>>,
}

impl<D: Document> RouteDefinition<D> {
    /// Create a definition without hooks.
    pub fn new(path: PathTemplate) -> Self {
        Self {
            path,
            hooks: HookSet::default(),
            custom_context: None,
        }
    }

    /// Attach a closure to a phase, replacing any previous hook.
    pub fn on<F>(self, phase: LifecyclePhase, hook: F) -> Self
    where
        F: Fn(&RouteHookContext<'_, D>) -> HookResult + 'static,
    {
        self.hook(phase, hook)
    }

    /// Attach a hook value to a phase, replacing any previous hook.
    pub fn hook<H: RouteHook<D>>(mut self, phase: LifecyclePhase, hook: H) -> Self {
        self.hooks.set(phase, Rc::new(hook));
        self
    }

    /// Attach the same hook to every phase.
    pub fn hook_all<H: RouteHook<D>>(mut self, hook: H) -> Self {
        let hook: Rc<dyn RouteHook<D>> = Rc::new(hook);
        for phase in LifecyclePhase::ALL {
            self.hooks.set(phase, hook.clone());
        }
        self
    }

    /// Attach an opaque value handed to every hook of this route.
    pub fn with_context<T: Any>(mut self, context: T) -> Self {
        self.custom_context = Some(Rc::new(context));
        self
    }

    /// The compiled path.
    pub fn path(&self) -> &PathTemplate {
        &self.path
    }

    /// The hook registered for `phase`, if any.
    pub fn hook_for(&self, phase: LifecyclePhase) -> Option<&dyn RouteHook<D>> {
        self.hooks.get(phase)
    }

    /// The custom context, if one was attached.
    pub fn custom_context(&self) -> Option<&dyn Any> {
        self.custom_context.as_deref()
    }
}

impl<D: Document> Clone for RouteDefinition<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            hooks: self.hooks.clone(),
            custom_context: self.custom_context.clone(),
        }
    }
}

impl<D: Document> fmt::Debug for RouteDefinition<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path.pattern())
            .field("hooks", &self.hooks)
            .field("custom_context", &self.custom_context.is_some())
            .finish()
    }
}

/// Hooks fired for every navigation, whatever the route.
#[derive(Clone, Default)]
pub struct GlobalHooks {
    hooks: HookSet<dyn GlobalHook>,
    custom_context: Option<Rc<dyn Any>>,
}

impl GlobalHooks {
    /// Create an empty hook bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a closure to a phase, replacing any previous hook.
    pub fn on<F>(self, phase: LifecyclePhase, hook: F) -> Self
    where
        F: Fn(&GlobalHookContext<'_>) -> HookResult + 'static,
    {
        self.hook(phase, hook)
    }

    /// Attach a hook value to a phase, replacing any previous hook.
    pub fn hook<H: GlobalHook>(mut self, phase: LifecyclePhase, hook: H) -> Self {
        self.hooks.set(phase, Rc::new(hook));
        self
    }

    /// Attach the same hook to every phase.
    pub fn hook_all<H: GlobalHook>(mut self, hook: H) -> Self {
        let hook: Rc<dyn GlobalHook> = Rc::new(hook);
        for phase in LifecyclePhase::ALL {
            self.hooks.set(phase, hook.clone());
        }
        self
    }

    /// Attach an opaque value handed to every global hook.
    pub fn with_context<T: Any>(mut self, context: T) -> Self {
        self.custom_context = Some(Rc::new(context));
        self
    }

    /// The hook registered for `phase`, if any.
    pub fn hook_for(&self, phase: LifecyclePhase) -> Option<&dyn GlobalHook> {
        self.hooks.get(phase)
    }

    /// The custom context, if one was attached.
    pub fn custom_context(&self) -> Option<&dyn Any> {
        self.custom_context.as_deref()
    }
}

impl fmt::Debug for GlobalHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalHooks")
            .field("hooks", &self.hooks)
            .field("custom_context", &self.custom_context.is_some())
            .finish()
    }
}
