//! Logging Hook - Observability for navigations.

use wayfarer_core::{
    Document, GlobalHook, GlobalHookContext, HookResult, RouteHook, RouteHookContext,
};

/// A hook that logs the phase, route and params it is called with.
///
/// Works as a global hook and as a per-route hook. Logs go through `tracing`
/// at debug level when the `tracing` feature is enabled; otherwise the hook
/// does nothing.
///
/// # Example
///
/// ```rust,ignore
/// let hooks = GlobalHooks::new().hook_all(LoggingHook::named("app"));
/// let users = RouteDefinition::new(path!("/users/{id}"))
///     .hook(LifecyclePhase::Load, LoggingHook::new());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingHook {
    name: &'static str,
}

impl LoggingHook {
    /// Create a new `LoggingHook` with a default name.
    pub fn new() -> Self {
        Self { name: "navigation" }
    }

    /// Create a new `LoggingHook` with a custom name.
    ///
    /// The name is used in log messages to tell several hooks apart.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingHook {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalHook for LoggingHook {
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                phase = %ctx.phase(),
                route = %ctx.route(),
                params = ?ctx.params(),
                "Lifecycle phase"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, ctx);
        }

        Ok(())
    }
}

impl<D: Document> RouteHook<D> for LoggingHook {
    fn on_phase(&self, ctx: &RouteHookContext<'_, D>) -> HookResult {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                name = %self.name,
                phase = %ctx.phase(),
                route = %ctx.route(),
                params = ?ctx.params(),
                "Route lifecycle phase"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, ctx);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::NoopNavigator;
    use wayfarer_core::{LifecyclePhase, Params, RouteKey};

    #[test]
    fn test_logging_hook_continues() {
        let hook = LoggingHook::new();
        let route = RouteKey::route("home");
        let params = Params::new().with("id", 7);
        let ctx = GlobalHookContext::new(
            LifecyclePhase::Load,
            &route,
            &params,
            None,
            &NoopNavigator,
        );
        assert!(GlobalHook::on_phase(&hook, &ctx).is_ok());
    }

    #[test]
    fn test_logging_hook_named() {
        assert_eq!(LoggingHook::named("app").name(), "app");
        assert_eq!(LoggingHook::default().name(), "navigation");
    }
}
