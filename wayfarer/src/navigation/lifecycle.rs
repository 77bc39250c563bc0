//! Lifecycle dispatch.
//!
//! Each phase calls the global hook first, then the route's own hook. The
//! navigation token is checked after every hook call: a hook that started a
//! newer navigation ends this one with [`NavigationError::Superseded`].

use super::state::{ActiveRoute, NavigationToken, TokenCounter};
use wayfarer_core::{
    Document, GlobalHookContext, GlobalHooks, HookResult, LifecyclePhase, NavigationError,
    Navigator, Params, RouteHookContext,
};

pub(crate) struct LifecycleDispatcher<'a> {
    pub(crate) global: Option<&'a GlobalHooks>,
    pub(crate) tokens: &'a TokenCounter,
    pub(crate) token: NavigationToken,
    pub(crate) navigator: &'a dyn Navigator,
}

impl LifecycleDispatcher<'_> {
    /// Fire `phase` for `route`.
    ///
    /// No `RefCell` borrow of router state may be held across this call.
    pub(crate) fn fire<D: Document>(
        &self,
        phase: LifecyclePhase,
        route: &ActiveRoute<D>,
        params: &Params,
    ) -> Result<(), NavigationError> {
        if let Some(global) = self.global {
            if let Some(hook) = global.hook_for(phase) {
                let ctx = GlobalHookContext::new(
                    phase,
                    &route.key,
                    params,
                    global.custom_context(),
                    self.navigator,
                );
                self.settle(phase, hook.on_phase(&ctx))?;
            }
        }

        if let Some(hook) = route.definition.hook_for(phase) {
            let ctx = RouteHookContext::<D>::new(
                phase,
                &route.key,
                &route.template,
                &*route.content,
                params,
                route.definition.custom_context(),
                self.navigator,
            );
            self.settle(phase, hook.on_phase(&ctx))?;
        }

        Ok(())
    }

    /// Fail if the navigation was superseded, then surface the hook's error.
    ///
    /// Supersession wins over a hook error: the newer navigation owns the
    /// outcome.
    pub(crate) fn settle(&self, phase: LifecyclePhase, result: HookResult) -> Result<(), NavigationError> {
        self.ensure_current()?;
        result.map_err(|source| NavigationError::Hook { phase, source })
    }

    pub(crate) fn ensure_current(&self) -> Result<(), NavigationError> {
        if self.tokens.is_current(self.token) {
            Ok(())
        } else {
            Err(NavigationError::Superseded)
        }
    }
}
