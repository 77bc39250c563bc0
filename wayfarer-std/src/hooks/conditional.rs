//! Conditional Hook - Run global hooks for some routes only.

use wayfarer_core::{GlobalHook, GlobalHookContext, HookResult};

/// A global hook that only runs its inner hook when `condition` holds.
///
/// When the condition is `false` the phase passes through untouched.
///
/// # Example
///
/// ```rust,ignore
/// // Track page views, but not for the not-found page
/// let views = ConditionalHook::new(
///     |ctx: &GlobalHookContext<'_>| !ctx.route().is_fallback(),
///     PageViewTracker::new(),
/// );
/// let hooks = GlobalHooks::new().hook(LifecyclePhase::AfterCommit, views);
/// ```
pub struct ConditionalHook<C, H> {
    condition: C,
    inner: H,
}

impl<C, H> ConditionalHook<C, H> {
    /// Create a new `ConditionalHook`.
    ///
    /// The inner hook will only be called when `condition(ctx)` returns `true`.
    pub fn new(condition: C, inner: H) -> Self
    where
        C: Fn(&GlobalHookContext<'_>) -> bool,
    {
        Self { condition, inner }
    }
}

impl<C, H> GlobalHook for ConditionalHook<C, H>
where
    C: Fn(&GlobalHookContext<'_>) -> bool + 'static,
    H: GlobalHook,
{
    fn on_phase(&self, ctx: &GlobalHookContext<'_>) -> HookResult {
        if (self.condition)(ctx) {
            self.inner.on_phase(ctx)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CountingHook, NoopNavigator};
    use wayfarer_core::{LifecyclePhase, Params, RouteKey};

    fn fire(hook: &impl GlobalHook, route: RouteKey) -> HookResult {
        let params = Params::new();
        let ctx = GlobalHookContext::new(LifecyclePhase::Load, &route, &params, None, &NoopNavigator);
        hook.on_phase(&ctx)
    }

    #[test]
    fn test_conditional_hook_true() {
        let counter = CountingHook::new();
        let hook = ConditionalHook::new(
            |ctx: &GlobalHookContext<'_>| !ctx.route().is_fallback(),
            counter.clone(),
        );

        fire(&hook, RouteKey::route("home")).unwrap();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_conditional_hook_false() {
        let counter = CountingHook::failing("not reached");
        let hook = ConditionalHook::new(
            |ctx: &GlobalHookContext<'_>| !ctx.route().is_fallback(),
            counter.clone(),
        );

        assert!(fire(&hook, RouteKey::fallback("PageNotFound")).is_ok());
        assert_eq!(counter.count(), 0);
    }
}
