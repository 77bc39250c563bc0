//! # Path Templates
//!
//! A [`PathTemplate`] is compiled from static text fragments interleaved with
//! named parameters, the same shape a `path!("/users/{username}")` invocation
//! produces:
//!
//! ```
//! use wayfarer_core::{Params, PathTemplate};
//!
//! let template = PathTemplate::compile(&["/users/", "/", ""], &["username", "subpage"]);
//! assert_eq!(template.first_segment(), "users");
//!
//! let params = Params::new().with("username", "Alice");
//! assert_eq!(template.build(&params), "/users/Alice");
//! ```
//!
//! # Matching
//!
//! Matching is coarse on purpose: only [`PathTemplate::first_segment`]
//! distinguishes routes. Everything after the first segment is parameter
//! territory, located by position.
//!
//! # Parameter positions
//!
//! A parameter's position is the first segment equal to its name. If the
//! same text is also used as an earlier static segment, the static segment's
//! position wins. A name that never forms a whole segment on its own has no
//! position and is ignored by [`build`](PathTemplate::build) and
//! [`extract`](PathTemplate::extract).

use crate::{
    error::{RouteErrorKind, RoutingError},
    params::Params,
};
use std::{borrow::Cow, fmt};

/// The path separator.
pub const PATH_SEPARATOR: char = '/';

/// Returns the first `/`-delimited segment of `path`.
///
/// The path is normalized to have a leading and a trailing separator first,
/// so `"about"`, `"/about"` and `"/about/x"` all yield `"about"`. The root
/// path yields the empty string.
pub fn page_name(path: &str) -> &str {
    let trimmed = path.strip_prefix(PATH_SEPARATOR).unwrap_or(path);
    match trimmed.find(PATH_SEPARATOR) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    }
}

/// A parameter name and its position within the template segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSlot {
    name: String,
    index: Option<usize>,
}

impl ParamSlot {
    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in [`PathTemplate::segments`], if the name forms a whole segment.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    pattern: String,
    segments: Vec<String>,
    static_parts: Vec<String>,
    has_dynamic_part: bool,
    first_segment: String,
    params: Vec<ParamSlot>,
}

impl PathTemplate {
    /// Compile a template from its static fragments and parameter names.
    ///
    /// `static_parts[i]` precedes `param_names[i]`; a well-formed template
    /// has one more static part than parameters.
    pub fn compile(static_parts: &[&str], param_names: &[&str]) -> Self {
        let mut pattern = String::new();
        for (index, part) in static_parts.iter().enumerate() {
            pattern.push_str(part);
            if let Some(name) = param_names.get(index) {
                pattern.push_str(name);
            }
        }

        let segments: Vec<String> = pattern.split(PATH_SEPARATOR).map(String::from).collect();
        let params = param_names
            .iter()
            .map(|name| ParamSlot {
                name: (*name).to_string(),
                index: segments.iter().position(|segment| segment.as_str() == *name),
            })
            .collect();

        Self {
            first_segment: page_name(static_parts.first().copied().unwrap_or_default()).to_string(),
            has_dynamic_part: !param_names.is_empty(),
            static_parts: static_parts.iter().map(|s| (*s).to_string()).collect(),
            pattern,
            segments,
            params,
        }
    }

    /// Parse a `{name}` style pattern at runtime.
    ///
    /// This is the runtime counterpart of the `path!` macro.
    pub fn parse(pattern: &str) -> Result<Self, RoutingError> {
        let mut static_parts = Vec::new();
        let mut param_names = Vec::new();
        let mut rest = pattern;

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(parse_error(pattern, "unmatched '}'"));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| parse_error(pattern, "unclosed '{'"))?;
            let name = &after[..close];
            if name.is_empty() {
                return Err(parse_error(pattern, "empty parameter name"));
            }
            if name.contains(['{', PATH_SEPARATOR]) {
                return Err(parse_error(pattern, "parameter names may not contain '{' or '/'"));
            }
            static_parts.push(&rest[..open]);
            param_names.push(name);
            rest = &after[close + 1..];
        }
        static_parts.push(rest);

        Ok(Self::compile(&static_parts, &param_names))
    }

    /// The pattern with every parameter replaced by its name.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// [`pattern`](Self::pattern) split on the separator.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The literal fragments the template was compiled from.
    pub fn static_parts(&self) -> &[String] {
        &self.static_parts
    }

    /// Whether the template has at least one parameter.
    pub fn has_dynamic_part(&self) -> bool {
        self.has_dynamic_part
    }

    /// The coarse route-matching key.
    pub fn first_segment(&self) -> &str {
        &self.first_segment
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[ParamSlot] {
        &self.params
    }

    /// Build a concrete path from parameter values.
    ///
    /// With no values at all, the first static part is returned without its
    /// trailing separator. Otherwise every parameter slot is filled with the
    /// percent-encoded value; slots without a (non-empty) value are dropped
    /// rather than left as empty components.
    pub fn build(&self, params: &Params) -> String {
        if params.is_empty() {
            let first = self.static_parts.first().map(String::as_str).unwrap_or_default();
            return first.strip_suffix(PATH_SEPARATOR).unwrap_or(first).to_string();
        }

        let mut slots: Vec<Option<Cow<'_, str>>> = self
            .segments
            .iter()
            .map(|segment| Some(Cow::Borrowed(segment.as_str())))
            .collect();
        for slot in &self.params {
            let Some(index) = slot.index else { continue };
            slots[index] = params
                .get(&slot.name)
                .filter(|value| !value.is_empty())
                .map(urlencoding::encode);
        }

        slots
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The URL a navigation to this template should record.
    ///
    /// Templates without parameters record their literal pattern, so the root
    /// route yields `/`; dynamic templates go through [`build`](Self::build).
    pub fn href(&self, params: &Params) -> String {
        if self.has_dynamic_part {
            self.build(params)
        } else {
            self.pattern.clone()
        }
    }

    /// Read parameter values back out of a pathname.
    ///
    /// Parameters whose position lies past the end of the path are skipped.
    pub fn extract(&self, pathname: &str) -> Result<Params, RoutingError> {
        let parts: Vec<&str> = pathname.split(PATH_SEPARATOR).collect();
        let mut params = Params::new();
        for slot in &self.params {
            let Some(raw) = slot.index.and_then(|index| parts.get(index)) else {
                continue;
            };
            let value = urlencoding::decode(raw).map_err(|err| {
                RoutingError::new(
                    RouteErrorKind::UnknownError,
                    "extract",
                    format!("Path parameter '{}' could not be decoded: {err}", slot.name),
                )
            })?;
            params.insert(slot.name.as_str(), value);
        }
        Ok(params)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn parse_error(pattern: &str, reason: &str) -> RoutingError {
    RoutingError::configuration("path template", format!("Invalid path pattern '{pattern}': {reason}."))
}
