use super::{ParameterGroup, QueryPairs};
use url::Url;

pub const KEY_FALLBACK_URL: &str = "ofl";

/// Fallback for platforms without a dedicated parameter group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherPlatformParameters {
    pub fallback_url: Option<Url>,
}

impl OtherPlatformParameters {
    pub fn new(fallback_url: Url) -> Self {
        Self {
            fallback_url: Some(fallback_url),
        }
    }
}

impl ParameterGroup for OtherPlatformParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .url(KEY_FALLBACK_URL, &self.fallback_url)
            .finish()
    }
}
