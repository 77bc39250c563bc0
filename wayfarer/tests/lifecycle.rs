mod common;

use common::{ABOUT, HOME, Routes, USERS, router_at};
use std::{cell::RefCell, rc::Rc};
use wayfarer::{
    GlobalHookContext, GlobalHooks, HookResult, LifecyclePhase, Params, RouteHookContext,
    memory::MemoryDocument,
    testing::{CountingHook, PhaseRecorder},
};

#[test]
fn test_phase_order_global_before_route() {
    let recorder = PhaseRecorder::new();
    let router = router_at("/", Routes::recorded(&recorder));
    assert!(router.initialize_route().success);
    recorder.clear();

    let params = Params::new().with("username", "Alice");
    assert!(router.goto("users", Some(params)).success);

    assert_eq!(
        recorder.labels(),
        [
            "global:leave:home",
            "route:leave:home",
            "global:load:users",
            "route:load:users",
            "global:before_commit:users",
            "route:before_commit:users",
            "global:after_commit:users",
            "route:after_commit:users",
        ]
    );

    let events = recorder.events();
    assert!(events[0].params.is_empty());
    assert_eq!(events[2].params.get("username"), Some("Alice"));
}

type Seen = Rc<RefCell<Vec<(LifecyclePhase, Vec<String>)>>>;

fn observer(
    document: MemoryDocument,
    seen: Seen,
) -> impl Fn(&RouteHookContext<'_, MemoryDocument>) -> HookResult {
    move |ctx| {
        seen.borrow_mut().push((ctx.phase(), document.outlet_content()));
        Ok(())
    }
}

#[test]
fn test_outlet_contents_at_each_phase() {
    let seen: Seen = Rc::default();
    let router = router_at("/", Routes::new());
    let document = router.document().clone();

    let mut routes = Routes::new();
    routes.about = routes
        .about
        .on(LifecyclePhase::Load, observer(document.clone(), Rc::clone(&seen)))
        .on(LifecyclePhase::BeforeCommit, observer(document.clone(), Rc::clone(&seen)))
        .on(LifecyclePhase::AfterCommit, observer(document, Rc::clone(&seen)));
    assert!(router.load_route_config(routes.config()).success);

    assert!(router.goto("home", None).success);
    assert!(router.goto("about", None).success);

    assert_eq!(
        *seen.borrow(),
        [
            (LifecyclePhase::Load, vec![HOME.to_string()]),
            (LifecyclePhase::BeforeCommit, vec![]),
            (LifecyclePhase::AfterCommit, vec![ABOUT.to_string()]),
        ]
    );
}

#[derive(Debug, PartialEq)]
struct UsersContext {
    page_size: usize,
}

#[test]
fn test_hook_contexts() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let mut routes = Routes::new();

    let log = Rc::clone(&seen);
    routes.users = routes
        .users
        .on(LifecyclePhase::Load, move |ctx| {
            let context = ctx.custom_context::<UsersContext>();
            log.borrow_mut().push(format!(
                "route {} {} {} {:?}",
                &**ctx.template_content(),
                ctx.cloned_content(),
                ctx.params().get("username").unwrap_or_default(),
                context.map(|c| c.page_size),
            ));
            assert!(ctx.custom_context::<String>().is_none());
            Ok(())
        })
        .with_context(UsersContext { page_size: 20 });

    let log = Rc::clone(&seen);
    routes.global = Some(
        GlobalHooks::new()
            .on(LifecyclePhase::Load, move |ctx: &GlobalHookContext<'_>| {
                log.borrow_mut().push(format!(
                    "global {} {:?}",
                    ctx.route_id(),
                    ctx.custom_context::<&str>()
                ));
                Ok(())
            })
            .with_context("app"),
    );

    let router = router_at("/", routes);
    let params = Params::new().with("username", "Alice");
    assert!(router.goto("users", Some(params)).success);

    assert_eq!(
        *seen.borrow(),
        [
            "global users Some(\"app\")".to_string(),
            format!("route {USERS} {USERS} Alice Some(20)"),
        ]
    );
}

#[test]
fn test_missing_hooks_are_skipped() {
    let router = router_at("/", Routes::new());
    assert!(router.initialize_route().success);
    assert!(router.goto("about", None).success);
    assert_eq!(router.document().outlet_content(), [ABOUT]);
}

#[test]
fn test_load_hook_failure_fails_navigation() {
    let counter = CountingHook::failing("profile service unavailable");
    let mut routes = Routes::new();
    routes.users = routes.users.hook(LifecyclePhase::Load, counter.clone());
    let after = CountingHook::new();
    routes.users = routes.users.hook(LifecyclePhase::AfterCommit, after.clone());

    let router = router_at("/", routes);
    assert!(router.initialize_route().success);

    let result = router.goto("users", None);
    assert!(!result.success);
    assert!(result.message.contains("UnknownError"), "{result}");
    assert!(result.message.contains("profile service unavailable"), "{result}");
    assert_eq!(counter.count(), 1);
    assert_eq!(after.count(), 0);
    assert_eq!(router.document().outlet_content(), [HOME]);
}

#[test]
fn test_leave_hook_failure_keeps_route() {
    let mut routes = Routes::new();
    routes.home = routes
        .home
        .hook(LifecyclePhase::Leave, CountingHook::failing("unsaved changes"));

    let router = router_at("/", routes);
    assert!(router.initialize_route().success);
    let entries = router.history().len();

    let result = router.goto("about", None);
    assert!(!result.success);
    assert!(result.message.contains("unsaved changes"));
    assert_eq!(router.current_route_id().as_deref(), Some("home"));
    assert_eq!(router.document().outlet_content(), [HOME]);
    assert_eq!(router.history().len(), entries);
}

#[test]
fn test_global_hook_failure() {
    let mut routes = Routes::new();
    routes.global = Some(GlobalHooks::new().hook(
        LifecyclePhase::BeforeCommit,
        CountingHook::failing("blocked"),
    ));

    let router = router_at("/", routes);
    let result = router.goto("about", None);
    assert!(!result.success);
    assert!(result.message.contains("before_commit hook failed: blocked"), "{result}");
    assert!(router.document().outlet_content().is_empty());
    assert!(!router.is_initialized());
}
