mod common;

use common::{ABOUT, HOME, Routes, USERS, router_at};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wayfarer::{
    GlobalHookContext, GlobalHooks, LifecyclePhase, Params, RouterResult, testing::PhaseRecorder,
};

fn alice() -> Params {
    Params::new().with("username", "Alice").with("subpage", "posts")
}

#[test]
fn test_load_hook_redirect_supersedes() {
    common::init_tracing();
    let recorder = PhaseRecorder::new();
    let nested: Rc<RefCell<Option<RouterResult>>> = Rc::default();

    let mut routes = Routes::recorded(&recorder);
    let slot = Rc::clone(&nested);
    routes.about = routes.about.on(LifecyclePhase::Load, move |ctx| {
        let result = ctx.navigator().goto("users", Some(alice()));
        *slot.borrow_mut() = Some(result);
        Ok(())
    });

    let router = router_at("/", routes);
    assert!(router.initialize_route().success);
    recorder.clear();

    let result = router.goto("about", None);
    assert!(result.success, "{result}");
    assert!(result.message.contains("superseded"), "{result}");
    assert!(nested.borrow().as_ref().is_some_and(|nested| nested.success));

    assert_eq!(router.document().outlet_content(), [USERS]);
    assert_eq!(router.current_route_id().as_deref(), Some("users"));
    assert_eq!(router.current_params(), alice());

    let labels = recorder.labels();
    assert!(!labels.iter().any(|label| label.ends_with(":before_commit:about")));
    assert!(!labels.iter().any(|label| label.ends_with(":after_commit:about")));
    assert!(labels.contains(&"route:after_commit:users".to_string()));

    let urls: Vec<_> = router
        .history()
        .entries()
        .into_iter()
        .map(|entry| entry.url)
        .collect();
    assert_eq!(urls, ["/", "/about", "/users/Alice/posts"]);
}

#[test]
fn test_after_commit_redirect_leaves_only_new_content() {
    let mut routes = Routes::new();
    routes.about = routes.about.on(LifecyclePhase::AfterCommit, |ctx| {
        ctx.navigator().goto("home", None);
        Ok(())
    });

    let router = router_at("/", routes);
    let result = router.goto("about", None);
    assert!(result.success);
    assert!(result.message.contains("superseded"));
    assert_eq!(router.document().outlet_content(), [HOME]);
    assert_eq!(router.current_route_id().as_deref(), Some("home"));
    assert!(router.is_initialized());
}

#[test]
fn test_leave_hook_redirect() {
    let redirected = Rc::new(Cell::new(false));
    let mut routes = Routes::new();
    let once = Rc::clone(&redirected);
    routes.home = routes.home.on(LifecyclePhase::Leave, move |ctx| {
        if !once.replace(true) {
            ctx.navigator().goto("users", Some(alice()));
        }
        Ok(())
    });

    let router = router_at("/", routes);
    assert!(router.initialize_route().success);

    let result = router.goto("about", None);
    assert!(result.success);
    assert!(result.message.contains("superseded"));
    assert!(redirected.get());
    assert_eq!(router.current_route_id().as_deref(), Some("users"));
    assert_eq!(router.document().outlet_content(), [USERS]);
    assert!(
        router
            .history()
            .entries()
            .iter()
            .all(|entry| entry.url != "/about")
    );
}

#[test]
fn test_global_guard_redirects() {
    let mut routes = Routes::new();
    routes.global = Some(GlobalHooks::new().on(
        LifecyclePhase::Load,
        |ctx: &GlobalHookContext<'_>| {
            if ctx.route_id() == "users" && ctx.params().get("username").is_none() {
                ctx.navigator().goto("home", None);
            }
            Ok(())
        },
    ));

    let router = router_at("/about", routes);
    assert!(router.initialize_route().success);

    assert!(router.goto("users", None).success);
    assert_eq!(router.current_route_id().as_deref(), Some("home"));
    assert_eq!(router.document().outlet_content(), [HOME]);

    assert!(router.goto("users", Some(alice())).success);
    assert_eq!(router.current_route_id().as_deref(), Some("users"));
}

#[test]
fn test_redirect_wins_over_hook_error() {
    let mut routes = Routes::new();
    routes.about = routes.about.on(LifecyclePhase::BeforeCommit, |ctx| {
        ctx.navigator().goto("home", None);
        Err("about failed after redirect".into())
    });

    let router = router_at("/", routes);
    let result = router.goto("about", None);
    assert!(result.success, "{result}");
    assert_eq!(router.document().outlet_content(), [HOME]);
}

#[test]
fn test_failed_nested_goto_does_not_cancel() {
    let nested: Rc<RefCell<Option<RouterResult>>> = Rc::default();
    let mut routes = Routes::new();
    let slot = Rc::clone(&nested);
    routes.about = routes.about.on(LifecyclePhase::BeforeCommit, move |ctx| {
        *slot.borrow_mut() = Some(ctx.navigator().goto("typo", None));
        Ok(())
    });

    let router = router_at("/", routes);
    assert!(router.initialize_route().success);

    let result = router.goto("about", None);
    assert!(result.success, "{result}");
    assert!(!result.message.contains("superseded"), "{result}");

    let nested = nested.borrow().clone().unwrap();
    assert!(!nested.success);
    assert!(nested.message.contains("RouteIdNotFound"), "{nested}");

    assert_eq!(router.current_route_id().as_deref(), Some("about"));
    assert_eq!(router.document().outlet_content(), [ABOUT]);
    assert_eq!(router.history().current().url, "/about");
}
