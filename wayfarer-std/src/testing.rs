//! Testing utilities for wayfarer.
//!
//! This module provides hooks and stand-ins that make navigation tests easy
//! to write.
//!
//! # Features
//!
//! - [`PhaseRecorder`]: A hook that records every phase it is called for
//! - [`CountingHook`]: A hook that counts calls and can be told to fail
//! - [`NoopNavigator`]: A navigator for calling hooks outside a router

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};
use wayfarer_core::{
    Document, GlobalHook, GlobalHookContext, HookResult, LifecyclePhase, Navigator, Params,
    RouteHook, RouteHookContext, RouterResult,
};

// ============================================================================
// Phase Recorder
// ============================================================================

/// Whether a recorded call came from a global or a per-route hook slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookScope {
    /// Registered through `on_all`.
    Global,
    /// Registered on a route definition.
    Route,
}

impl fmt::Display for HookScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Route => f.write_str("route"),
        }
    }
}

/// One recorded hook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseEvent {
    /// Which slot fired.
    pub scope: HookScope,
    /// The phase fired.
    pub phase: LifecyclePhase,
    /// The route passing through the phase.
    pub route_id: String,
    /// The params seen by the hook.
    pub params: Params,
}

impl fmt::Display for PhaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.scope, self.phase, self.route_id)
    }
}

/// A hook that records every call it receives.
///
/// Clones share the same log, so register clones on as many routes and
/// phases as needed and inspect any of them afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = PhaseRecorder::new();
/// let config = RouteConfig::new()
///     .route("home", RouteDefinition::new(path!("/")).hook_all(recorder.clone()))
///     .fallback("PageNotFound", RouteDefinition::new(path!("/404")))
///     .on_all(GlobalHooks::new().hook_all(recorder.clone()));
///
/// // ... navigate ...
///
/// assert_eq!(
///     recorder.labels(),
///     ["global:load:home", "route:load:home", /* ... */],
/// );
/// ```
#[derive(Clone, Default)]
pub struct PhaseRecorder {
    events: Rc<RefCell<Vec<PhaseEvent>>>,
}

impl PhaseRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded calls.
    pub fn events(&self) -> Vec<PhaseEvent> {
        self.events.borrow().clone()
    }

    /// The recorded phases, in call order.
    pub fn phases(&self) -> Vec<LifecyclePhase> {
        self.events.borrow().iter().map(|event| event.phase).collect()
    }

    /// The recorded calls as `scope:phase:route` strings.
    pub fn labels(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.events.borrow().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, scope: HookScope, phase: LifecyclePhase, route_id: &str, params: &Params) {
        self.events.borrow_mut().push(PhaseEvent {
            scope,
            phase,
            route_id: route_id.to_string(),
            params: params.clone(),
        });
    }
}

impl GlobalHook for PhaseRecorder {
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        self.record(HookScope::Global, ctx.phase(), ctx.route_id(), ctx.params());
        Ok(())
    }
}

impl<D: Document> RouteHook<D> for PhaseRecorder {
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult {
        self.record(HookScope::Route, ctx.phase(), ctx.route().id(), ctx.params());
        Ok(())
    }
}

// ============================================================================
// Counting Hook
// ============================================================================

/// A hook that counts invocations, optionally failing every one of them.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHook::failing("not allowed");
/// let admin = RouteDefinition::new(path!("/admin"))
///     .hook(LifecyclePhase::Load, counter.clone());
///
/// // ... navigate to "admin" ...
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CountingHook {
    count: Rc<Cell<usize>>,
    failure: Option<Rc<str>>,
}

impl CountingHook {
    /// Create a counter that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter that fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            count: Rc::default(),
            failure: Some(Rc::from(message)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }

    fn call(&self) -> HookResult {
        self.count.set(self.count.get() + 1);
        match &self.failure {
            Some(message) => Err(message.to_string().into()),
            None => Ok(()),
        }
    }
}

impl GlobalHook for CountingHook {
    fn on_phase(&self, _ctx: &GlobalHookContext<'_>) -> HookResult {
        self.call()
    }
}

impl<D: Document> RouteHook<D> for CountingHook {
    fn on_phase(&self, _ctx: &RouteHookContext<'_, D>) -> HookResult {
        self.call()
    }
}

// ============================================================================
// Noop Navigator
// ============================================================================

/// A navigator that refuses every request.
///
/// Lets hooks be called directly, without a router behind the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn goto(&self, route_id: &str, _params: Option<Params>) -> RouterResult {
        RouterResult::failed(format!("no router to navigate to '{route_id}'"))
    }

    fn goto_fallback(&self, fallback_id: &str, _params: Option<Params>) -> RouterResult {
        RouterResult::failed(format!("no router to navigate to '{fallback_id}'"))
    }
}
