//! Procedural macros for wayfarer.
//!
//! - [`path!`](macro@path) - a path template checked at compile time

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// A route path template, validated at compile time.
///
/// `{name}` marks a parameter. The macro expands to a
/// `wayfarer::PathTemplate::compile` call with the static parts and
/// parameter names split out, so malformed patterns fail the build instead
/// of the first navigation.
///
/// # Example
///
/// ```rust,ignore
/// use wayfarer::path;
///
/// let users = path!("/users/{username}/{subpage}");
/// assert_eq!(users.first_segment(), "users");
///
/// // error: unclosed '{' in path template
/// // let broken = path!("/users/{username");
/// ```
#[proc_macro]
pub fn path(input: TokenStream) -> TokenStream {
    let pattern = parse_macro_input!(input as LitStr);

    let (static_parts, param_names) = match split_pattern(&pattern.value()) {
        Ok(split) => split,
        Err(message) => {
            return syn::Error::new_spanned(&pattern, message)
                .to_compile_error()
                .into();
        }
    };

    let expanded = quote! {
        ::wayfarer::PathTemplate::compile(&[#(#static_parts),*], &[#(#param_names),*])
    };

    TokenStream::from(expanded)
}

/// Split `/a/{b}/c` into `["/a/", "/c"]` and `["b"]`.
fn split_pattern(pattern: &str) -> Result<(Vec<String>, Vec<String>), String> {
    let mut static_parts = Vec::new();
    let mut param_names = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find(['{', '}']) {
        if rest[open..].starts_with('}') {
            return Err(format!("unmatched '}}' in path template `{pattern}`"));
        }
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(format!("unclosed '{{' in path template `{pattern}`"));
        };
        let name = &after[..close];
        if name.is_empty() {
            return Err(format!("empty parameter name in path template `{pattern}`"));
        }
        if name.contains(['{', '/']) {
            return Err(format!(
                "parameter `{name}` in path template `{pattern}` may not contain '{{' or '/'"
            ));
        }
        static_parts.push(rest[..open].to_string());
        param_names.push(name.to_string());
        rest = &after[close + 1..];
    }
    static_parts.push(rest.to_string());

    Ok((static_parts, param_names))
}
