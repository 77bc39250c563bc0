#![allow(dead_code)]

use wayfarer::{
    GlobalHooks, PAGE_NOT_FOUND, PathTemplate, RouteConfig, RouteDefinition, RouteManager,
    memory::{MemoryDocument, MemoryHistory},
    testing::PhaseRecorder,
};

// ============================================================================
// Fixture
// ============================================================================

pub type Router = RouteManager<MemoryDocument, MemoryHistory>;
pub type Definition = RouteDefinition<MemoryDocument>;

pub const HOME: &str = "<h1>Home</h1>";
pub const ABOUT: &str = "<h1>About</h1>";
pub const USERS: &str = "<h1>User</h1>";
pub const NOT_FOUND: &str = "<h1>Not found</h1>";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

pub fn route(pattern: &str) -> Definition {
    RouteDefinition::new(PathTemplate::parse(pattern).unwrap())
}

pub fn document() -> MemoryDocument {
    MemoryDocument::new()
        .route_template("home", HOME)
        .route_template("about", ABOUT)
        .route_template("users", USERS)
        .fallback_template(PAGE_NOT_FOUND, NOT_FOUND)
}

/// home `/`, about `/about`, users `/users/{username}/{subpage}/{postId}`,
/// fallback PageNotFound `/404`.
pub struct Routes {
    pub home: Definition,
    pub about: Definition,
    pub users: Definition,
    pub not_found: Definition,
    pub global: Option<GlobalHooks>,
}

impl Routes {
    pub fn new() -> Self {
        Self {
            home: route("/"),
            about: route("/about"),
            users: route("/users/{username}/{subpage}/{postId}"),
            not_found: route("/404"),
            global: None,
        }
    }

    /// Every route and the global slot record into `recorder`.
    pub fn recorded(recorder: &PhaseRecorder) -> Self {
        let routes = Self::new();
        Self {
            home: routes.home.hook_all(recorder.clone()),
            about: routes.about.hook_all(recorder.clone()),
            users: routes.users.hook_all(recorder.clone()),
            not_found: routes.not_found.hook_all(recorder.clone()),
            global: Some(GlobalHooks::new().hook_all(recorder.clone())),
        }
    }

    pub fn config(self) -> RouteConfig<MemoryDocument> {
        let config = RouteConfig::new()
            .route("home", self.home)
            .route("about", self.about)
            .route("users", self.users)
            .fallback(PAGE_NOT_FOUND, self.not_found);
        match self.global {
            Some(global) => config.on_all(global),
            None => config,
        }
    }
}

/// A configured router whose history starts at `pathname`.
pub fn router_at(pathname: &str, routes: Routes) -> Router {
    router_with(document(), pathname, routes)
}

pub fn router_with(document: MemoryDocument, pathname: &str, routes: Routes) -> Router {
    let router = RouteManager::new(document, MemoryHistory::new(pathname));
    let result = router.load_route_config(routes.config());
    assert!(result.success, "{result}");
    router
}
