//! Flattens [`LinkComponents`] into the canonical long link.
//!
//! # Algorithm
//!
//! 1. Start with `link` = the base link's absolute string
//! 2. Merge parameter groups in a fixed order: analytics, social, iOS,
//!    Android, iTunes Connect, other platform, options
//! 3. A later group overwrites an earlier group's key, so options always win
//! 4. Percent-encode keys and values, join with `&`
//! 5. Parse `<domain prefix>/?<query>` as a URL
//!
//! The query map is ordered by key, so encoding is deterministic.

use crate::domain::entities::LinkComponents;
use crate::domain::parameters::ParameterGroup;
use crate::utils::query_string::build_query;
use std::collections::BTreeMap;
use url::Url;

pub const KEY_LINK: &str = "link";

/// Builds the wire key/value map for `components`.
///
/// Always contains `link`.
pub fn query_map(components: &LinkComponents) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(KEY_LINK.to_string(), components.link().as_str().to_string());

    let groups: [Option<&dyn ParameterGroup>; 7] = [
        components
            .analytics_parameters
            .as_ref()
            .map(|p| p as &dyn ParameterGroup),
        components
            .social_meta_tag_parameters
            .as_ref()
            .map(|p| p as &dyn ParameterGroup),
        Some(&components.ios_parameters),
        components
            .android_parameters
            .as_ref()
            .map(|p| p as &dyn ParameterGroup),
        components
            .itunes_connect_parameters
            .as_ref()
            .map(|p| p as &dyn ParameterGroup),
        components
            .other_platform_parameters
            .as_ref()
            .map(|p| p as &dyn ParameterGroup),
        // Must stay last.
        Some(&components.options),
    ];

    merge_groups(&mut map, groups.into_iter().flatten());
    map
}

/// Encodes `components` into the final long link.
///
/// Returns `None` if the domain prefix and query do not form a valid URL.
pub fn encode(components: &LinkComponents) -> Option<Url> {
    let map = query_map(components);
    let query = build_query(map.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let candidate = format!("{}/?{}", components.domain_uri_prefix(), query);

    match Url::parse(&candidate) {
        Ok(url) => {
            tracing::debug!(pairs = map.len(), "Encoded durable link");
            Some(url)
        }
        Err(e) => {
            tracing::debug!(url = %candidate, "Encoded durable link is not a valid URL: {}", e);
            None
        }
    }
}

fn merge_groups<'a, I>(map: &mut BTreeMap<String, String>, groups: I)
where
    I: IntoIterator<Item = &'a dyn ParameterGroup>,
{
    for group in groups {
        for (key, value) in group.query_pairs() {
            map.insert(key.to_string(), value);
        }
    }
}
