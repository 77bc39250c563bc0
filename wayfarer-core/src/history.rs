//! # History Collaborator

use crate::params::Params;

/// The payload stored with every history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HistoryState {
    /// The route id navigated to.
    pub route_id: String,
    /// The params of that navigation.
    pub params: Params,
    /// Whether `route_id` names a fallback route.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fallback: bool,
}

impl HistoryState {
    /// State for a normal route.
    pub fn new(route_id: impl Into<String>, params: Params) -> Self {
        Self {
            route_id: route_id.into(),
            params,
            fallback: false,
        }
    }

    /// State for a fallback route.
    pub fn fallback(route_id: impl Into<String>, params: Params) -> Self {
        Self {
            fallback: true,
            ..Self::new(route_id, params)
        }
    }
}

/// Access to the session history and the current location.
///
/// Pop notifications flow the other way: the binding calls
/// `RouteManager::handle_pop_state` with the state it got back.
pub trait History: 'static {
    /// The pathname of the current location.
    fn pathname(&self) -> String;

    /// Add an entry.
    fn push_state(&self, state: &HistoryState, url: &str);

    /// Overwrite the current entry.
    fn replace_state(&self, state: &HistoryState, url: &str);
}
