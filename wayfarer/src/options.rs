//! Router options.

use crate::activation::ActivationTrigger;
use wayfarer_core::OutletMarker;

/// Keys that activate a route link by default.
pub const DEFAULT_ACTIVATION_KEYS: [&str; 3] = ["Enter", " ", "Space"];

/// Options fixed when a router is created.
///
/// # Example
///
/// ```rust,ignore
/// let options = RouterOptions::new()
///     .outlet_marker(OutletMarker::new("id", "app"))
///     .activation_keys(["Enter"]);
/// let router = RouteManager::with_options(document, history, options);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    outlet_marker: OutletMarker,
    activation_keys: Vec<String>,
}

impl RouterOptions {
    /// Default options: outlet `[data-outlet="main"]`, activation on Enter and Space.
    pub fn new() -> Self {
        Self {
            outlet_marker: OutletMarker::default(),
            activation_keys: DEFAULT_ACTIVATION_KEYS.iter().map(|key| key.to_string()).collect(),
        }
    }

    /// Set the marker used to find or create the outlet.
    pub fn outlet_marker(mut self, marker: OutletMarker) -> Self {
        self.outlet_marker = marker;
        self
    }

    /// Replace the keys that activate a route link.
    pub fn activation_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.activation_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// The outlet marker.
    pub fn marker(&self) -> &OutletMarker {
        &self.outlet_marker
    }

    /// The keys that activate a route link.
    pub fn keys(&self) -> &[String] {
        &self.activation_keys
    }

    /// Whether `trigger` should start a navigation.
    pub fn activates(&self, trigger: &ActivationTrigger) -> bool {
        match trigger {
            ActivationTrigger::Pointer => true,
            ActivationTrigger::Key(key) => self.activation_keys.iter().any(|k| k == key),
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self::new()
    }
}
