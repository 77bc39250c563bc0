mod common;

use common::{ABOUT, HOME, NOT_FOUND, Routes, USERS, router_at};
use wayfarer::{HistoryState, PAGE_NOT_FOUND, Params, RouteKey, testing::PhaseRecorder};

#[test]
fn test_back_and_forward_replay_entries() {
    let router = router_at("/", Routes::new());
    assert!(router.initialize_route().success);
    assert!(router.goto("about", None).success);
    let params = Params::new().with("username", "Alice");
    assert!(router.goto("users", Some(params.clone())).success);
    assert_eq!(router.history().len(), 3);

    let entry = router.history().back().unwrap();
    let result = router.handle_pop_state(entry.state);
    assert!(result.success, "{result}");
    assert_eq!(router.current_route_id().as_deref(), Some("about"));
    assert_eq!(router.document().outlet_content(), [ABOUT]);
    assert_eq!(router.history().len(), 3);
    assert_eq!(router.history().current().url, "/about");

    let entry = router.history().forward().unwrap();
    assert!(router.handle_pop_state(entry.state).success);
    assert_eq!(router.current_route_id().as_deref(), Some("users"));
    assert_eq!(router.current_params(), params);
    assert_eq!(router.document().outlet_content(), [USERS]);
    assert_eq!(router.history().len(), 3);
}

#[test]
fn test_pop_runs_full_lifecycle() {
    let recorder = PhaseRecorder::new();
    let router = router_at("/", Routes::recorded(&recorder));
    assert!(router.initialize_route().success);
    assert!(router.goto("about", None).success);
    recorder.clear();

    let entry = router.history().back().unwrap();
    assert!(router.handle_pop_state(entry.state).success);
    assert_eq!(
        recorder.labels(),
        [
            "global:leave:about",
            "route:leave:about",
            "global:load:home",
            "route:load:home",
            "global:before_commit:home",
            "route:before_commit:home",
            "global:after_commit:home",
            "route:after_commit:home",
        ]
    );
}

#[test]
fn test_pop_to_fallback_entry() {
    let router = router_at("/", Routes::new());
    assert!(router.initialize_route().success);
    assert!(router.goto_fallback(PAGE_NOT_FOUND, None).success);
    assert!(router.goto("about", None).success);

    let entry = router.history().back().unwrap();
    assert!(entry.state.as_ref().is_some_and(|state| state.fallback));
    assert!(router.handle_pop_state(entry.state).success);
    assert_eq!(router.current_route(), Some(RouteKey::fallback(PAGE_NOT_FOUND)));
    assert_eq!(router.document().outlet_content(), [NOT_FOUND]);
}

#[test]
fn test_pop_without_state_resolves_pathname() {
    let router = router_at("/about", Routes::new());
    assert!(router.goto("home", None).success);
    assert_eq!(router.history().len(), 2);

    let entry = router.history().back().unwrap();
    assert!(entry.state.is_none());
    let result = router.handle_pop_state(None);
    assert!(result.success, "{result}");
    assert_eq!(router.current_route_id().as_deref(), Some("about"));
    assert_eq!(router.history().len(), 2);
    assert!(router.history().current().state.is_none());
}

#[test]
fn test_pop_with_unknown_route_fails() {
    let router = router_at("/", Routes::new());
    assert!(router.initialize_route().success);

    let stale = HistoryState::new("removed", Params::new());
    let result = router.handle_pop_state(Some(stale));
    assert!(!result.success);
    assert!(result.message.contains("RouteIdNotFound"));
    assert_eq!(router.document().outlet_content(), [HOME]);
}
