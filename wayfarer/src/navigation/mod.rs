//! # Navigation
//!
//! [`RouteManager`] owns one navigation root: an outlet, a route registry and
//! the state of the active route. Every navigation runs the same sequence:
//!
//! 1. Mint a token that supersedes any navigation still in flight.
//! 2. Resolve the target's definition and template. Nothing changes on a miss.
//! 3. Fire `Leave` on the outgoing route, once a first navigation has settled.
//! 4. Record the new route and params, instantiate fresh content and
//!    synchronize the history.
//! 5. Fire `Load`, clear the outlet, fire `BeforeCommit`, attach the content,
//!    fire `AfterCommit`.
//!
//! The token is checked after every hook. A hook that navigates elsewhere
//! supersedes the running navigation, whose remaining steps are skipped.
//!
//! Public calls never panic or return `Err`: every failure is logged and
//! reported as a [`RouterResult`] with `success == false`.

mod history;
mod lifecycle;
mod state;

use self::{
    history::synchronize,
    lifecycle::LifecycleDispatcher,
    state::{ActiveRoute, NavigationState, TokenCounter},
};
use crate::{activation::Activation, options::RouterOptions};
use bitflags::bitflags;
use std::{cell::RefCell, rc::Rc};
use wayfarer_core::{
    Document, History, HistoryState, LifecyclePhase, NavigationError, Navigator, PAGE_NOT_FOUND,
    Params, RouteDefinition, RouteErrorKind, RouteKey, RouterResult, RoutingError, page_name,
};
use wayfarer_std::registry::{RouteConfig, RouteRegistry};

bitflags! {
    /// How a navigation was requested.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NavigationFlags: u8 {
        /// The target id names a fallback route.
        const FALLBACK = 1;
        /// The navigation replays a history entry; the history is not written.
        const FROM_HISTORY_POP = 1 << 1;
        /// Replace the current history entry instead of pushing one.
        const REPLACE_HISTORY = 1 << 2;
    }
}

/// The navigation engine for one outlet.
///
/// # Example
///
/// ```rust,ignore
/// use wayfarer::prelude::*;
///
/// let router = RouteManager::new(document, history);
/// router.load_route_config(
///     RouteConfig::new()
///         .route("home", RouteDefinition::new(path!("/")))
///         .route("users", RouteDefinition::new(path!("/users/{username}")))
///         .fallback("PageNotFound", RouteDefinition::new(path!("/404"))),
/// );
///
/// router.initialize_route();
/// let result = router.goto("users", Some(Params::from([("username", "Alice")])));
/// assert!(result.success);
/// ```
pub struct RouteManager<D: Document, H: History> {
    document: D,
    history: H,
    options: RouterOptions,
    registry: RefCell<Option<Rc<RouteRegistry<D>>>>,
    state: RefCell<NavigationState<D>>,
    outlet: RefCell<Option<D::Outlet>>,
    tokens: TokenCounter,
}

impl<D: Document, H: History> RouteManager<D, H> {
    /// Mount a router with default options.
    pub fn new(document: D, history: H) -> Self {
        Self::with_options(document, history, RouterOptions::default())
    }

    /// Mount a router.
    ///
    /// The outlet is looked up by the configured marker and created when the
    /// document has none.
    pub fn with_options(document: D, history: H, options: RouterOptions) -> Self {
        let outlet = document.locate_outlet(options.marker()).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(marker = %options.marker(), "Outlet not found, creating one");

            document.create_outlet(options.marker())
        });

        Self {
            document,
            history,
            options,
            registry: RefCell::new(None),
            state: RefCell::new(NavigationState::new()),
            outlet: RefCell::new(Some(outlet)),
            tokens: TokenCounter::default(),
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Install a compiled registry, replacing any previous one.
    pub fn set_route_config(&self, registry: RouteRegistry<D>) -> RouterResult {
        *self.registry.borrow_mut() = Some(Rc::new(registry));
        RouterResult::ok("Route config set.")
    }

    /// Compile `config` and install it.
    pub fn load_route_config(&self, config: RouteConfig<D>) -> RouterResult {
        match RouteRegistry::compile(config) {
            Ok(registry) => self.set_route_config(registry),
            Err(err) => Self::report("load route config", err.into()),
        }
    }

    /// The installed registry.
    pub fn registry(&self) -> Option<Rc<RouteRegistry<D>>> {
        self.registry.borrow().clone()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to the route matching the current pathname.
    ///
    /// Params are read back out of the pathname. When no route matches, the
    /// `PageNotFound` fallback is shown instead. The entry the page was
    /// loaded with is replaced, not pushed.
    pub fn initialize_route(&self) -> RouterResult {
        let result = self.navigate_to_location(NavigationFlags::REPLACE_HISTORY);
        Self::conclude("initialize route", result)
    }

    /// Navigate to a normal route.
    pub fn goto(&self, route_id: &str, params: Option<Params>) -> RouterResult {
        let result = self.navigate(route_id, params, NavigationFlags::empty());
        Self::conclude("goto", result)
    }

    /// Navigate to a fallback route.
    pub fn goto_fallback(&self, fallback_id: &str, params: Option<Params>) -> RouterResult {
        let result = self.navigate(fallback_id, params, NavigationFlags::FALLBACK);
        Self::conclude("goto fallback", result)
    }

    /// React to the user moving through the session history.
    ///
    /// An entry recorded by this router is replayed as is. An entry without
    /// state is resolved from the current pathname. Neither writes to the
    /// history.
    pub fn handle_pop_state(&self, state: Option<HistoryState>) -> RouterResult {
        let result = match state {
            Some(state) => {
                let mut flags = NavigationFlags::FROM_HISTORY_POP;
                if state.fallback {
                    flags |= NavigationFlags::FALLBACK;
                }
                self.navigate(&state.route_id, Some(state.params), flags)
            }
            None => self.navigate_to_location(NavigationFlags::FROM_HISTORY_POP),
        };
        Self::conclude("pop state", result)
    }

    /// React to a route link being activated.
    ///
    /// Returns `None` when the trigger is not an activation, such as a key
    /// outside [`RouterOptions::keys`].
    pub fn handle_activation(&self, activation: &Activation) -> Option<RouterResult> {
        if !self.options.activates(&activation.trigger) {
            return None;
        }

        let result = match &activation.route_id {
            Some(route_id) => self.navigate(
                route_id,
                Some(activation.params.clone()),
                NavigationFlags::empty(),
            ),
            None => Err(RoutingError::new(
                RouteErrorKind::RouteIdNotSet,
                "route link",
                "The link has no route id. Set one with set_route_data.",
            )
            .into()),
        };
        Some(Self::conclude("route link", result))
    }

    /// Remove everything from the outlet.
    pub fn clear_outlet_content(&self) -> RouterResult {
        match self.outlet() {
            Ok(outlet) => {
                self.document.clear_outlet(&outlet);
                RouterResult::ok("Outlet cleared.")
            }
            Err(err) => Self::report("clear outlet content", err.into()),
        }
    }

    /// Detach the outlet. Later navigations fail with `OutletNotFound`.
    pub fn unmount(&self) -> Option<D::Outlet> {
        self.outlet.borrow_mut().take()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The active route, with its table.
    pub fn current_route(&self) -> Option<RouteKey> {
        self.state.borrow().route_key().ok().cloned()
    }

    /// The active route id.
    pub fn current_route_id(&self) -> Option<String> {
        self.current_route().map(|key| key.id().to_string())
    }

    /// The params of the latest navigation.
    pub fn current_params(&self) -> Params {
        self.state.borrow().params().clone()
    }

    /// Whether a navigation has settled at least once.
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().is_initialized()
    }

    /// The document this router draws into.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The history this router writes to.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The options this router was mounted with.
    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn installed_registry(&self) -> Result<Rc<RouteRegistry<D>>, RoutingError> {
        self.registry.borrow().clone().ok_or_else(|| {
            RoutingError::configuration(
                "read route config",
                "The route config has not been set. Call set_route_config first.",
            )
        })
    }

    fn outlet(&self) -> Result<D::Outlet, RoutingError> {
        self.outlet.borrow().clone().ok_or_else(|| {
            RoutingError::new(
                RouteErrorKind::OutletNotFound,
                "read outlet",
                format!("No outlet matching {} is mounted.", self.options.marker()),
            )
        })
    }

    fn navigate_to_location(&self, flags: NavigationFlags) -> Result<String, NavigationError> {
        let registry = self.installed_registry()?;
        let pathname = self.history.pathname();

        match registry.match_by_first_segment(page_name(&pathname)) {
            Some(route_id) => {
                let params = match registry.routes().get(route_id) {
                    Some(definition) => definition.path().extract(&pathname)?,
                    None => Params::new(),
                };
                self.navigate(route_id, Some(params), flags)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(pathname = %pathname, "No route matches the pathname");

                self.navigate(PAGE_NOT_FOUND, None, flags | NavigationFlags::FALLBACK)
            }
        }
    }

    fn navigate(
        &self,
        route_id: &str,
        params: Option<Params>,
        flags: NavigationFlags,
    ) -> Result<String, NavigationError> {
        let key = if flags.contains(NavigationFlags::FALLBACK) {
            RouteKey::fallback(route_id)
        } else {
            RouteKey::route(route_id)
        };
        let result = self.run(key.clone(), params.unwrap_or_default(), flags);

        #[cfg(feature = "tracing")]
        match &result {
            Ok(()) => tracing::debug!(route = %key, "Navigation settled"),
            Err(NavigationError::Superseded) => {
                tracing::debug!(route = %key, "Navigation superseded")
            }
            Err(_) => {}
        }

        result.map(|()| format!("Navigated to {key}."))
    }

    fn run(
        &self,
        key: RouteKey,
        params: Params,
        flags: NavigationFlags,
    ) -> Result<(), NavigationError> {
        let registry = self.installed_registry()?;
        let outlet = self.outlet()?;
        let (definition, template) = self.resolve(&registry, &key)?;

        // Only a request that resolved may cancel the one in flight.
        let token = self.tokens.mint();

        #[cfg(feature = "tracing")]
        tracing::debug!(route = %key, token = %token, ?flags, "Navigation started");

        let dispatcher = LifecycleDispatcher {
            global: registry.global_hooks(),
            tokens: &self.tokens,
            token,
            navigator: self,
        };

        let outgoing = {
            let state = self.state.borrow();
            if state.is_initialized() {
                Some((state.active()?.clone(), state.params().clone()))
            } else {
                None
            }
        };
        if let Some((route, route_params)) = outgoing {
            dispatcher.fire(LifecyclePhase::Leave, &route, &route_params)?;
        }

        let content = Rc::new(self.document.instantiate(&template));
        let incoming = ActiveRoute {
            key,
            definition,
            template,
            content,
        };
        self.state
            .borrow_mut()
            .commit(incoming.clone(), params.clone());

        let url = incoming.definition.path().href(&params);
        let _write = synchronize(&self.history, &incoming.key, &params, &url, flags);

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, write = ?_write, "History synchronized");

        dispatcher.fire(LifecyclePhase::Load, &incoming, &params)?;
        self.document.clear_outlet(&outlet);
        dispatcher.fire(LifecyclePhase::BeforeCommit, &incoming, &params)?;
        self.document.append_to_outlet(&outlet, &incoming.content);
        dispatcher.fire(LifecyclePhase::AfterCommit, &incoming, &params)?;

        self.state.borrow_mut().mark_initialized();
        Ok(())
    }

    /// Find the definition and template for `key` without touching state.
    ///
    /// The active route reuses what it already resolved.
    fn resolve(
        &self,
        registry: &RouteRegistry<D>,
        key: &RouteKey,
    ) -> Result<(Rc<RouteDefinition<D>>, D::Template), RoutingError> {
        {
            let state = self.state.borrow();
            if state.is_active(key) {
                let active = state.active()?;
                return Ok((Rc::clone(&active.definition), active.template.clone()));
            }
        }

        let (place, table) = if key.is_fallback() {
            ("goto fallback", "fallback")
        } else {
            ("goto", "route")
        };
        let definition = registry.definition(key).cloned().ok_or_else(|| {
            RoutingError::new(
                RouteErrorKind::RouteIdNotFound,
                place,
                format!("The id '{}' is missing from the {table} map.", key.id()),
            )
        })?;
        let template = self.document.locate_template(key).ok_or_else(|| {
            RoutingError::new(
                RouteErrorKind::TemplateNotFound,
                place,
                format!("No template found for {key}."),
            )
        })?;

        Ok((definition, template))
    }

    fn conclude(title: &'static str, result: Result<String, NavigationError>) -> RouterResult {
        match result {
            Ok(message) => RouterResult::ok(message),
            Err(NavigationError::Superseded) => {
                RouterResult::ok(format!("{title}: navigation was superseded by a newer one."))
            }
            Err(err) => Self::report(title, err),
        }
    }

    fn report(title: &'static str, err: NavigationError) -> RouterResult {
        let message = match &err {
            NavigationError::Routing(routing) => routing.to_string(),
            other => RoutingError::new(other.kind(), title, other.to_string()).to_string(),
        };

        #[cfg(feature = "tracing")]
        tracing::error!(title, kind = %err.kind(), "{message}");

        RouterResult::failed(message)
    }
}

impl<D: Document, H: History> Navigator for RouteManager<D, H> {
    fn goto(&self, route_id: &str, params: Option<Params>) -> RouterResult {
        RouteManager::goto(self, route_id, params)
    }

    fn goto_fallback(&self, fallback_id: &str, params: Option<Params>) -> RouterResult {
        RouteManager::goto_fallback(self, fallback_id, params)
    }
}
