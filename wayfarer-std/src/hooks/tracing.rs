use wayfarer_core::{
    Document, GlobalHook, GlobalHookContext, HookResult, RouteHook, RouteHookContext,
};

/// A hook wrapper that runs the inner hook inside a `tracing` span.
///
/// The span is named `lifecycle_hook` and records the wrapper's name, the
/// phase and the route. Logs emitted by the inner hook, including those of
/// navigations it starts, nest under it. Without the `tracing` feature the
/// wrapper just calls through.
pub struct TracingHook<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHook<H> {
    /// Create a new `TracingHook` wrapper around a hook.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped hook.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Clone> Clone for TracingHook<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: Copy> Copy for TracingHook<H> {}

impl<H: GlobalHook> GlobalHook for TracingHook<H> {
    #[cfg(feature = "tracing")]
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        let span = tracing::info_span!(
            "lifecycle_hook",
            hook = %self.name,
            phase = %ctx.phase(),
            route = %ctx.route(),
        );
        let _entered = span.enter();
        self.inner.on_phase(ctx)
    }

    #[cfg(not(feature = "tracing"))]
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        self.inner.on_phase(ctx)
    }
}

impl<D: Document, H: RouteHook<D>> RouteHook<D> for TracingHook<H> {
    #[cfg(feature = "tracing")]
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult {
        let span = tracing::info_span!(
            "lifecycle_hook",
            hook = %self.name,
            phase = %ctx.phase(),
            route = %ctx.route(),
            params = ?ctx.params(),
        );
        let _entered = span.enter();
        self.inner.on_phase(ctx)
    }

    #[cfg(not(feature = "tracing"))]
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult {
        self.inner.on_phase(ctx)
    }
}
