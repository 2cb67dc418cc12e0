//! Durable link entity produced by a successful exchange.

use crate::domain::parameters::PathLength;
use std::collections::BTreeMap;
use url::Url;

const DEEP_LINK_KEY: &str = "link";
const MINIMUM_APP_VERSION_KEY: &str = "imv";
const PATH_LENGTH_KEY: &str = "pathLength";
const UTM_PREFIX: &str = "utm_";

/// A resolved durable link.
///
/// Only constructed from a long link string that parses as a URL; see
/// [`DurableLink::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurableLink {
    url: Url,
}

impl DurableLink {
    /// Parses a long link returned by a delegate.
    ///
    /// Returns `None` when the string is not a valid URL.
    pub fn parse(long_link: &str) -> Option<Self> {
        Url::parse(long_link).ok().map(|url| Self { url })
    }

    /// The long link as returned by the exchanger.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The target link carried in the `link` parameter.
    pub fn deep_link(&self) -> Option<Url> {
        self.query_value(DEEP_LINK_KEY)
            .and_then(|value| Url::parse(&value).ok())
    }

    /// All `utm_*` parameters, decoded.
    pub fn utm_parameters(&self) -> BTreeMap<String, String> {
        self.url
            .query_pairs()
            .filter(|(key, _)| key.starts_with(UTM_PREFIX))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn minimum_app_version(&self) -> Option<String> {
        self.query_value(MINIMUM_APP_VERSION_KEY)
    }

    /// The requested path length, if present and one of the known literals.
    pub fn path_length(&self) -> Option<PathLength> {
        self.query_value(PATH_LENGTH_KEY)
            .and_then(|value| value.parse().ok())
    }

    fn query_value(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_LINK: &str = "https://xyz.example/?imv=2.1&link=https%3A%2F%2Fexample.com%2Fpage%3Fid%3D7&pathLength=SHORT&utm_campaign=spring%20sale&utm_source=newsletter";

    #[test]
    fn test_parse_valid() {
        let link = DurableLink::parse(LONG_LINK).unwrap();
        assert_eq!(link.url().host_str(), Some("xyz.example"));
    }

    #[test]
    fn test_parse_invalid_yields_none() {
        assert!(DurableLink::parse("not a url").is_none());
        assert!(DurableLink::parse("").is_none());
    }

    #[test]
    fn test_deep_link_is_decoded() {
        let link = DurableLink::parse(LONG_LINK).unwrap();
        assert_eq!(
            link.deep_link().unwrap().as_str(),
            "https://example.com/page?id=7"
        );
    }

    #[test]
    fn test_utm_parameters() {
        let link = DurableLink::parse(LONG_LINK).unwrap();
        let utm = link.utm_parameters();

        assert_eq!(utm.len(), 2);
        assert_eq!(utm["utm_campaign"], "spring sale");
        assert_eq!(utm["utm_source"], "newsletter");
    }

    #[test]
    fn test_minimum_app_version_and_path_length() {
        let link = DurableLink::parse(LONG_LINK).unwrap();

        assert_eq!(link.minimum_app_version().as_deref(), Some("2.1"));
        assert_eq!(link.path_length(), Some(PathLength::Short));
    }

    #[test]
    fn test_plain_url_has_no_metadata() {
        let link = DurableLink::parse("https://example.com/page").unwrap();

        assert!(link.deep_link().is_none());
        assert!(link.utm_parameters().is_empty());
        assert!(link.minimum_app_version().is_none());
        assert!(link.path_length().is_none());
    }
}
