//! Route configuration and the compiled route registry.
//!
//! A [`RouteConfig`] is the raw, declarative input: normal routes, a fallback
//! section and an optional set of global hooks. [`RouteRegistry::compile`]
//! validates it into the immutable form the router navigates with.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = RouteConfig::new()
//!     .route("home", RouteDefinition::new(path!("/")))
//!     .route("users", RouteDefinition::new(path!("/users/{username}")))
//!     .fallback("PageNotFound", RouteDefinition::new(path!("/404")))
//!     .on_all(GlobalHooks::new().hook_all(LoggingHook::new()));
//!
//! let registry = RouteRegistry::compile(config)?;
//! assert_eq!(registry.match_by_first_segment("users"), Some("users"));
//! ```

use std::{fmt, rc::Rc};
use wayfarer_core::{
    Document, GlobalHooks, PAGE_NOT_FOUND, RouteDefinition, RouteKey, RouteKind, RoutingError,
};

// ============================================================================
// Route Table
// ============================================================================

/// An insertion-ordered table of route id to definition.
///
/// Inserting an id that is already present replaces its definition but keeps
/// its original position.
pub struct RouteTable<D: Document> {
    entries: Vec<(String, Rc<RouteDefinition<D>>)>,
}

impl<D: Document> RouteTable<D> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, id: impl Into<String>, definition: RouteDefinition<D>) {
        let id = id.into();
        let definition = Rc::new(definition);
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = definition,
            None => self.entries.push((id, definition)),
        }
    }

    /// Look up a definition.
    pub fn get(&self, id: &str) -> Option<&Rc<RouteDefinition<D>>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, definition)| definition)
    }

    /// Whether `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids and definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDefinition<D>)> {
        self.entries
            .iter()
            .map(|(id, definition)| (id.as_str(), definition.as_ref()))
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the route whose path starts with `segment`.
    ///
    /// Every entry is checked; when several match, the one declared last
    /// wins.
    pub fn match_by_first_segment(&self, segment: &str) -> Option<&str> {
        let mut matched = None;
        for (id, definition) in self.iter() {
            if definition.path().first_segment() == segment {
                matched = Some(id);
            }
        }
        matched
    }
}

impl<D: Document> Default for RouteTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> fmt::Debug for RouteTable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(id, definition)| (id, definition.path().pattern())))
            .finish()
    }
}

// ============================================================================
// Route Config
// ============================================================================

/// Raw route configuration.
pub struct RouteConfig<D: Document> {
    routes: RouteTable<D>,
    fallbacks: Option<RouteTable<D>>,
    on_all: Option<GlobalHooks>,
}

impl<D: Document> RouteConfig<D> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            fallbacks: None,
            on_all: None,
        }
    }

    /// Declare a normal route.
    pub fn route(mut self, id: impl Into<String>, definition: RouteDefinition<D>) -> Self {
        self.routes.insert(id, definition);
        self
    }

    /// Declare a fallback route. The first call opens the fallback section.
    pub fn fallback(mut self, id: impl Into<String>, definition: RouteDefinition<D>) -> Self {
        self.fallbacks
            .get_or_insert_with(RouteTable::new)
            .insert(id, definition);
        self
    }

    /// Set the hooks fired on every navigation.
    pub fn on_all(mut self, hooks: GlobalHooks) -> Self {
        self.on_all = Some(hooks);
        self
    }
}

impl<D: Document> Default for RouteConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Route Registry
// ============================================================================

/// A validated, immutable route configuration.
///
/// To change routes, compile a new registry and hand it to the router.
pub struct RouteRegistry<D: Document> {
    routes: RouteTable<D>,
    fallbacks: RouteTable<D>,
    global_hooks: Option<GlobalHooks>,
}

impl<D: Document> RouteRegistry<D> {
    /// Validate a configuration.
    ///
    /// Fails with a configuration error when the fallback section is missing
    /// or does not declare `PageNotFound`.
    pub fn compile(config: RouteConfig<D>) -> Result<Self, RoutingError> {
        let RouteConfig {
            routes,
            fallbacks,
            on_all,
        } = config;

        let fallbacks = fallbacks.ok_or_else(|| {
            RoutingError::configuration(
                "compile route config",
                format!(
                    "Setting a fallback in the route configuration is required. Declare a fallback with the id '{PAGE_NOT_FOUND}' and provide its template."
                ),
            )
        })?;
        if !fallbacks.contains(PAGE_NOT_FOUND) {
            return Err(RoutingError::configuration(
                "compile route config",
                format!("The fallback section must declare the id '{PAGE_NOT_FOUND}'."),
            ));
        }

        Ok(Self {
            routes,
            fallbacks,
            global_hooks: on_all,
        })
    }

    /// Normal routes.
    pub fn routes(&self) -> &RouteTable<D> {
        &self.routes
    }

    /// Fallback routes.
    pub fn fallbacks(&self) -> &RouteTable<D> {
        &self.fallbacks
    }

    /// Hooks fired on every navigation.
    pub fn global_hooks(&self) -> Option<&GlobalHooks> {
        self.global_hooks.as_ref()
    }

    /// The definition behind `key`, looked up in the matching table.
    pub fn definition(&self, key: &RouteKey) -> Option<&Rc<RouteDefinition<D>>> {
        match key.kind() {
            RouteKind::Route => self.routes.get(key.id()),
            RouteKind::Fallback => self.fallbacks.get(key.id()),
        }
    }

    /// See [`RouteTable::match_by_first_segment`].
    pub fn match_by_first_segment(&self, segment: &str) -> Option<&str> {
        self.routes.match_by_first_segment(segment)
    }
}

impl<D: Document> TryFrom<RouteConfig<D>> for RouteRegistry<D> {
    type Error = RoutingError;

    fn try_from(config: RouteConfig<D>) -> Result<Self, Self::Error> {
        Self::compile(config)
    }
}

impl<D: Document> fmt::Debug for RouteRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .field("fallbacks", &self.fallbacks)
            .field("global_hooks", &self.global_hooks)
            .finish()
    }
}
