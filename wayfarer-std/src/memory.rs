//! In-memory document and history.
//!
//! [`MemoryDocument`] and [`MemoryHistory`] implement the collaborator traits
//! with plain values so the navigation engine can run outside a browser:
//! in tests, in server-side rendering and in headless tooling.
//!
//! Both are cheap, cloneable handles over shared state. Keep a clone to
//! inspect what the router did.
//!
//! # Example
//!
//! ```rust,ignore
//! let document = MemoryDocument::new()
//!     .route_template("home", "<h1>Home</h1>")
//!     .fallback_template("PageNotFound", "<h1>404</h1>");
//! let history = MemoryHistory::new("/");
//!
//! let router = RouteManager::new(document.clone(), history.clone());
//! // ... navigate ...
//! assert_eq!(document.outlet_content(), ["<h1>Home</h1>"]);
//! ```

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};
use wayfarer_core::{Document, History, HistoryState, OutletMarker, RouteKey};

// ============================================================================
// Memory Document
// ============================================================================

/// An outlet backed by a list of attached fragments.
#[derive(Debug, Clone)]
pub struct MemoryOutlet {
    marker: OutletMarker,
    children: Rc<RefCell<Vec<String>>>,
}

impl MemoryOutlet {
    fn new(marker: OutletMarker) -> Self {
        Self {
            marker,
            children: Rc::default(),
        }
    }

    /// The marker this outlet carries.
    pub fn marker(&self) -> &OutletMarker {
        &self.marker
    }

    /// Attached fragments, oldest first.
    pub fn children(&self) -> Vec<String> {
        self.children.borrow().clone()
    }
}

impl PartialEq for MemoryOutlet {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.children, &other.children)
    }
}

#[derive(Default)]
struct DocumentState {
    templates: HashMap<RouteKey, Rc<str>>,
    outlet: Option<MemoryOutlet>,
    outlets_created: usize,
}

/// A [`Document`] holding templates as strings.
///
/// Templates are keyed by [`RouteKey`], so a route and a fallback may share
/// an id and still have separate templates.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
    instantiations: Rc<Cell<usize>>,
}

impl MemoryDocument {
    /// Create a document with no templates and no outlet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template for a normal route.
    pub fn route_template(self, id: impl Into<String>, content: &str) -> Self {
        self.insert_template(RouteKey::route(id), content);
        self
    }

    /// Add a template for a fallback route.
    pub fn fallback_template(self, id: impl Into<String>, content: &str) -> Self {
        self.insert_template(RouteKey::fallback(id), content);
        self
    }

    /// Start with an existing outlet carrying `marker`.
    pub fn with_outlet(self, marker: OutletMarker) -> Self {
        self.state.borrow_mut().outlet = Some(MemoryOutlet::new(marker));
        self
    }

    /// Add or replace a template.
    pub fn insert_template(&self, key: RouteKey, content: &str) {
        self.state.borrow_mut().templates.insert(key, Rc::from(content));
    }

    /// Remove a template, returning its content.
    pub fn remove_template(&self, key: &RouteKey) -> Option<Rc<str>> {
        self.state.borrow_mut().templates.remove(key)
    }

    /// The outlet, if one exists.
    pub fn outlet(&self) -> Option<MemoryOutlet> {
        self.state.borrow().outlet.clone()
    }

    /// What the outlet currently holds. Empty when there is no outlet.
    pub fn outlet_content(&self) -> Vec<String> {
        self.outlet()
            .map(|outlet| outlet.children())
            .unwrap_or_default()
    }

    /// How many outlets [`Document::create_outlet`] has made.
    pub fn outlets_created(&self) -> usize {
        self.state.borrow().outlets_created
    }

    /// How many times a template has been instantiated.
    pub fn instantiation_count(&self) -> usize {
        self.instantiations.get()
    }
}

impl Document for MemoryDocument {
    type Template = Rc<str>;
    type Fragment = String;
    type Outlet = MemoryOutlet;

    fn locate_template(&self, key: &RouteKey) -> Option<Self::Template> {
        self.state.borrow().templates.get(key).cloned()
    }

    fn instantiate(&self, template: &Self::Template) -> Self::Fragment {
        self.instantiations.set(self.instantiations.get() + 1);
        template.to_string()
    }

    fn locate_outlet(&self, marker: &OutletMarker) -> Option<Self::Outlet> {
        self.state
            .borrow()
            .outlet
            .as_ref()
            .filter(|outlet| outlet.marker == *marker)
            .cloned()
    }

    fn create_outlet(&self, marker: &OutletMarker) -> Self::Outlet {
        let outlet = MemoryOutlet::new(marker.clone());
        let mut state = self.state.borrow_mut();
        state.outlet = Some(outlet.clone());
        state.outlets_created += 1;
        outlet
    }

    fn clear_outlet(&self, outlet: &Self::Outlet) {
        outlet.children.borrow_mut().clear();
    }

    fn append_to_outlet(&self, outlet: &Self::Outlet, fragment: &Self::Fragment) {
        outlet.children.borrow_mut().push(fragment.clone());
    }
}

// ============================================================================
// Memory History
// ============================================================================

/// One session history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The state pushed with the entry. `None` for the initial entry.
    pub state: Option<HistoryState>,
    /// The entry's URL.
    pub url: String,
}

struct HistoryLog {
    entries: Vec<HistoryEntry>,
    index: usize,
}

/// A [`History`] backed by a list of entries and a cursor.
///
/// [`back`](Self::back) and [`forward`](Self::forward) move the cursor and
/// return the entry landed on; hand its state to the router's pop handler
/// the way a browser would fire `popstate`.
#[derive(Clone)]
pub struct MemoryHistory {
    log: Rc<RefCell<HistoryLog>>,
}

impl MemoryHistory {
    /// Start with a single stateless entry at `pathname`.
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            log: Rc::new(RefCell::new(HistoryLog {
                entries: vec![HistoryEntry {
                    state: None,
                    url: pathname.into(),
                }],
                index: 0,
            })),
        }
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.log.borrow().entries.clone()
    }

    /// The entry under the cursor.
    pub fn current(&self) -> HistoryEntry {
        let log = self.log.borrow();
        log.entries[log.index].clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.log.borrow().entries.len()
    }

    /// Always false: there is at least the initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step back one entry, if possible.
    pub fn back(&self) -> Option<HistoryEntry> {
        let mut log = self.log.borrow_mut();
        let index = log.index.checked_sub(1)?;
        log.index = index;
        Some(log.entries[index].clone())
    }

    /// Step forward one entry, if possible.
    pub fn forward(&self) -> Option<HistoryEntry> {
        let mut log = self.log.borrow_mut();
        let index = log.index + 1;
        if index >= log.entries.len() {
            return None;
        }
        log.index = index;
        Some(log.entries[index].clone())
    }
}

impl History for MemoryHistory {
    fn pathname(&self) -> String {
        let url = self.current().url;
        match url.find(['?', '#']) {
            Some(end) => url[..end].to_string(),
            None => url,
        }
    }

    fn push_state(&self, state: &HistoryState, url: &str) {
        let mut log = self.log.borrow_mut();
        let index = log.index + 1;
        log.entries.truncate(index);
        log.entries.push(HistoryEntry {
            state: Some(state.clone()),
            url: url.to_string(),
        });
        log.index = index;
    }

    fn replace_state(&self, state: &HistoryState, url: &str) {
        let mut log = self.log.borrow_mut();
        let index = log.index;
        log.entries[index] = HistoryEntry {
            state: Some(state.clone()),
            url: url.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::Params;

    #[test]
    fn test_templates_are_keyed_by_table() {
        let document = MemoryDocument::new()
            .route_template("PageNotFound", "route")
            .fallback_template("PageNotFound", "fallback");

        let route = document.locate_template(&RouteKey::route("PageNotFound"));
        let fallback = document.locate_template(&RouteKey::fallback("PageNotFound"));
        assert_eq!(route.as_deref(), Some("route"));
        assert_eq!(fallback.as_deref(), Some("fallback"));

        document.remove_template(&RouteKey::route("PageNotFound"));
        assert!(document.locate_template(&RouteKey::route("PageNotFound")).is_none());
    }

    #[test]
    fn test_outlet_lookup_and_creation() {
        let marker = OutletMarker::default();
        let document = MemoryDocument::new();
        assert!(document.locate_outlet(&marker).is_none());

        let outlet = document.create_outlet(&marker);
        assert_eq!(document.outlets_created(), 1);
        assert_eq!(document.locate_outlet(&marker), Some(outlet.clone()));
        assert!(document.locate_outlet(&OutletMarker::new("id", "app")).is_none());

        let template: Rc<str> = Rc::from("<p>hi</p>");
        let fragment = document.instantiate(&template);
        document.append_to_outlet(&outlet, &fragment);
        assert_eq!(document.outlet_content(), ["<p>hi</p>"]);
        assert_eq!(document.instantiation_count(), 1);

        document.clear_outlet(&outlet);
        assert!(document.outlet_content().is_empty());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push_state(&HistoryState::new("about", Params::new()), "/about");
        history.push_state(&HistoryState::new("users", Params::new()), "/users/a");
        assert_eq!(history.len(), 3);

        let back = history.back().unwrap();
        assert_eq!(back.url, "/about");
        assert_eq!(history.pathname(), "/about");

        history.push_state(&HistoryState::new("home", Params::new()), "/");
        assert_eq!(history.len(), 3);
        assert!(history.forward().is_none());
        assert_eq!(history.current().url, "/");
    }

    #[test]
    fn test_replace_keeps_length() {
        let history = MemoryHistory::new("/about?tab=1");
        assert_eq!(history.pathname(), "/about");

        history.replace_state(&HistoryState::new("about", Params::new()), "/about");
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.current().state.map(|state| state.route_id),
            Some("about".to_string())
        );
        assert!(history.back().is_none());
    }
}
