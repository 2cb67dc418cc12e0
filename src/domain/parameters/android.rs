use super::{ParameterGroup, QueryPairs};
use url::Url;

pub const KEY_PACKAGE_NAME: &str = "apn";
pub const KEY_FALLBACK_URL: &str = "afl";
pub const KEY_MINIMUM_VERSION: &str = "amv";

/// Routing hints for Android clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AndroidParameters {
    pub package_name: Option<String>,
    pub fallback_url: Option<Url>,
    /// Minimum `versionCode` of the app that can open the link.
    pub minimum_version: Option<i64>,
}

impl AndroidParameters {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: Some(package_name.into()),
            ..Self::default()
        }
    }
}

impl ParameterGroup for AndroidParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .text(KEY_PACKAGE_NAME, &self.package_name)
            .url(KEY_FALLBACK_URL, &self.fallback_url)
            .integer(KEY_MINIMUM_VERSION, self.minimum_version)
            .finish()
    }
}
