//! # Document Collaborator
//!
//! The engine never touches a DOM directly. Template lookup, instantiation
//! and outlet manipulation go through a [`Document`] implementation, which a
//! browser binding backs with real `<template>` elements and an in-memory
//! binding backs with plain values.

use crate::route::RouteKey;
use std::fmt;

/// The attribute that marks the outlet element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletMarker {
    attribute: String,
    value: String,
}

impl OutletMarker {
    /// Marker `attribute="value"`.
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for OutletMarker {
    /// `data-outlet="main"`.
    fn default() -> Self {
        Self::new("data-outlet", "main")
    }
}

impl fmt::Display for OutletMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}=\"{}\"]", self.attribute, self.value)
    }
}

/// Access to templates and the outlet.
///
/// All methods take `&self`: documents are shared, interior-mutable handles.
pub trait Document: 'static {
    /// A located template. Cloning must be cheap (a handle, not the content).
    type Template: Clone;
    /// Content instantiated from a template.
    type Fragment;
    /// The outlet element.
    type Outlet: Clone;

    /// Find the template for a route (`data-routeid` or `data-fallbackid`).
    fn locate_template(&self, key: &RouteKey) -> Option<Self::Template>;

    /// Instantiate fresh content from a template.
    fn instantiate(&self, template: &Self::Template) -> Self::Fragment;

    /// Find the outlet carrying `marker`.
    fn locate_outlet(&self, marker: &OutletMarker) -> Option<Self::Outlet>;

    /// Create an outlet carrying `marker` under the navigation root.
    fn create_outlet(&self, marker: &OutletMarker) -> Self::Outlet;

    /// Remove everything from the outlet.
    fn clear_outlet(&self, outlet: &Self::Outlet);

    /// Attach content to the outlet.
    fn append_to_outlet(&self, outlet: &Self::Outlet, fragment: &Self::Fragment);
}
