use super::{ParameterGroup, QueryPairs};
use url::Url;

pub const KEY_TITLE: &str = "st";
pub const KEY_DESCRIPTION_TEXT: &str = "sd";
pub const KEY_IMAGE_URL: &str = "si";

/// Preview metadata shown when the link is shared on social platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialMetaTagParameters {
    pub title: Option<String>,
    pub description_text: Option<String>,
    pub image_url: Option<Url>,
}

impl ParameterGroup for SocialMetaTagParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .text(KEY_TITLE, &self.title)
            .text(KEY_DESCRIPTION_TEXT, &self.description_text)
            .url(KEY_IMAGE_URL, &self.image_url)
            .finish()
    }
}
