//! # Lifecycle Hooks
//!
//! Every navigation runs through four ordered phases:
//!
//! 1. [`LifecyclePhase::Leave`] - on the outgoing route, before anything is torn down
//! 2. [`LifecyclePhase::Load`] - incoming route resolved, outlet untouched
//! 3. [`LifecyclePhase::BeforeCommit`] - outlet cleared, new content not yet attached
//! 4. [`LifecyclePhase::AfterCommit`] - new content attached
//!
//! Per-route hooks implement [`RouteHook`] and see the route's template and
//! content clone. Global hooks implement [`GlobalHook`] and see the active
//! route id instead. Both traits are implemented for plain closures, so most
//! hooks never name the traits at all.
//!
//! Hooks may fail by returning an error; the navigation then fails. They may
//! also start a new navigation through the context's navigator, which
//! supersedes the running one.

use crate::{
    context::{GlobalHookContext, RouteHookContext},
    document::Document,
    error::BoxError,
};
use std::{fmt, rc::Rc};

/// The result every hook returns.
pub type HookResult = Result<(), BoxError>;

/// A phase of the navigation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    /// Fired on the outgoing route.
    Leave,
    /// Fired once the incoming route is resolved.
    Load,
    /// Fired after the outlet is cleared.
    BeforeCommit,
    /// Fired after the new content is attached.
    AfterCommit,
}

impl LifecyclePhase {
    /// Every phase, in firing order.
    pub const ALL: [LifecyclePhase; 4] = [
        LifecyclePhase::Leave,
        LifecyclePhase::Load,
        LifecyclePhase::BeforeCommit,
        LifecyclePhase::AfterCommit,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Leave => 0,
            Self::Load => 1,
            Self::BeforeCommit => 2,
            Self::AfterCommit => 3,
        }
    }

    /// Stable snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Load => "load",
            Self::BeforeCommit => "before_commit",
            Self::AfterCommit => "after_commit",
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-route lifecycle hook.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a route hook for documents of type `{D}`",
    label = "missing `RouteHook` implementation",
    note = "Closures of type `Fn(&RouteHookContext<'_, {D}>) -> HookResult` implement `RouteHook` automatically."
)]
pub trait RouteHook<D: Document>: 'static {
    /// Called when the route passes through `ctx.phase()`.
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult;
}

impl<D, F> RouteHook<D> for F
where
    D: Document,
    F: Fn(&RouteHookContext<'_, D>) -> HookResult + 'static,
{
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult {
        self(ctx)
    }
}

/// A hook fired on every navigation, whatever the route.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a global hook",
    label = "missing `GlobalHook` implementation",
    note = "Closures of type `Fn(&GlobalHookContext<'_>) -> HookResult` implement `GlobalHook` automatically."
)]
pub trait GlobalHook: 'static {
    /// Called when any route passes through `ctx.phase()`.
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult;
}

impl<F> GlobalHook for F
where
    F: Fn(&GlobalHookContext<'_>) -> HookResult + 'static,
{
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        self(ctx)
    }
}

/// At most one hook per phase.
pub struct HookSet<H: ?Sized> {
    hooks: [Option<Rc<H>>; 4],
}

impl<H: ?Sized> HookSet<H> {
    /// The hook registered for `phase`.
    pub fn get(&self, phase: LifecyclePhase) -> Option<&H> {
        self.hooks[phase.index()].as_deref()
    }

    /// Register `hook` for `phase`, returning the hook it replaces.
    pub fn set(&mut self, phase: LifecyclePhase, hook: Rc<H>) -> Option<Rc<H>> {
        self.hooks[phase.index()].replace(hook)
    }

    /// Number of phases with a hook.
    pub fn len(&self) -> usize {
        self.hooks.iter().flatten().count()
    }

    /// Whether no phase has a hook.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: ?Sized> Default for HookSet<H> {
    fn default() -> Self {
        Self {
            hooks: std::array::from_fn(|_| None),
        }
    }
}

impl<H: ?Sized> Clone for HookSet<H> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<H: ?Sized> fmt::Debug for HookSet<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                LifecyclePhase::ALL
                    .iter()
                    .filter(|phase| self.get(**phase).is_some()),
            )
            .finish()
    }
}
