//! Query string encoding for generated long links.
//!
//! Only unreserved characters (`A-Z a-z 0-9 - _ . ~`) are left literal, so
//! reserved query characters such as `&`, `=`, `:` and `/` are always escaped.

use std::borrow::Cow;

/// Percent-encodes a single key or value.
pub fn encode_component(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Joins `key=value` pairs with `&`, percent-encoding both sides.
///
/// Pairs are emitted in iteration order.
pub fn build_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
