//! Route links: elements that navigate when activated.
//!
//! A [`RouteLink`] holds the route id and params a link points at. A
//! binding turns the element's click or key events into an [`Activation`]
//! and hands it to [`RouteManager::handle_activation`], which decides whether
//! the trigger counts and navigates.
//!
//! [`RouteManager::handle_activation`]: crate::RouteManager::handle_activation

use wayfarer_core::Params;

/// What the user did to a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationTrigger {
    /// A click or tap.
    Pointer,
    /// A key press, by key name (`"Enter"`, `" "`, ...).
    Key(String),
}

impl ActivationTrigger {
    /// A key press.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

/// A request to navigate produced by a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// The link's route id, if one was set.
    pub route_id: Option<String>,
    /// The link's params.
    pub params: Params,
    /// What activated the link.
    pub trigger: ActivationTrigger,
}

/// A navigation-triggering element.
///
/// # Example
///
/// ```rust,ignore
/// let mut link = RouteLink::new();
/// link.set_route_data("users", Params::from([("username", "Alice")]));
///
/// router.handle_activation(&link.activation(ActivationTrigger::Pointer));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteLink {
    route_id: Option<String>,
    params: Params,
}

impl RouteLink {
    /// The ARIA role a link element should carry.
    pub const ROLE: &'static str = "link";
    /// The tab index that makes a link element focusable.
    pub const TAB_INDEX: &'static str = "0";

    /// Create a link with no route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a link pointing at `route_id`.
    pub fn to(route_id: impl Into<String>, params: Params) -> Self {
        Self {
            route_id: Some(route_id.into()),
            params,
        }
    }

    /// Point the link at `route_id` with `params`.
    pub fn set_route_data(&mut self, route_id: impl Into<String>, params: Params) {
        self.route_id = Some(route_id.into());
        self.params = params;
    }

    /// The route id, if set.
    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    /// The params.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Attributes the element should carry to behave as a link.
    pub fn accessibility_attributes(&self) -> [(&'static str, &'static str); 2] {
        [("role", Self::ROLE), ("tabindex", Self::TAB_INDEX)]
    }

    /// The navigation request for `trigger`.
    pub fn activation(&self, trigger: ActivationTrigger) -> Activation {
        Activation {
            route_id: self.route_id.clone(),
            params: self.params.clone(),
            trigger,
        }
    }
}
