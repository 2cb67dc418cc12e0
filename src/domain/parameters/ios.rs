use super::{ParameterGroup, QueryPairs};
use url::Url;

pub const KEY_BUNDLE_ID: &str = "ibi";
pub const KEY_FALLBACK_URL: &str = "ifl";
pub const KEY_CUSTOM_SCHEME: &str = "ius";
pub const KEY_IPAD_FALLBACK_URL: &str = "ipfl";
pub const KEY_IPAD_BUNDLE_ID: &str = "ipbi";
pub const KEY_APP_STORE_ID: &str = "isi";
pub const KEY_MINIMUM_APP_VERSION: &str = "imv";

/// Routing hints for iOS and iPadOS clients.
///
/// Present (but empty) on every [`crate::LinkComponents`] by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IosParameters {
    pub bundle_id: Option<String>,
    pub fallback_url: Option<Url>,
    pub custom_scheme: Option<String>,
    pub ipad_fallback_url: Option<Url>,
    pub ipad_bundle_id: Option<String>,
    pub app_store_id: Option<String>,
    pub minimum_app_version: Option<String>,
}

impl IosParameters {
    pub fn new(bundle_id: impl Into<String>) -> Self {
        Self {
            bundle_id: Some(bundle_id.into()),
            ..Self::default()
        }
    }
}

impl ParameterGroup for IosParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .text(KEY_BUNDLE_ID, &self.bundle_id)
            .url(KEY_FALLBACK_URL, &self.fallback_url)
            .text(KEY_CUSTOM_SCHEME, &self.custom_scheme)
            .url(KEY_IPAD_FALLBACK_URL, &self.ipad_fallback_url)
            .text(KEY_IPAD_BUNDLE_ID, &self.ipad_bundle_id)
            .text(KEY_APP_STORE_ID, &self.app_store_id)
            .text(KEY_MINIMUM_APP_VERSION, &self.minimum_app_version)
            .finish()
    }
}
