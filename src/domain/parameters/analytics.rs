use super::{ParameterGroup, QueryPairs};

pub const KEY_SOURCE: &str = "utm_source";
pub const KEY_MEDIUM: &str = "utm_medium";
pub const KEY_CAMPAIGN: &str = "utm_campaign";
pub const KEY_TERM: &str = "utm_term";
pub const KEY_CONTENT: &str = "utm_content";

/// UTM campaign tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsParameters {
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl AnalyticsParameters {
    pub fn new(
        source: impl Into<String>,
        medium: impl Into<String>,
        campaign: impl Into<String>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            medium: Some(medium.into()),
            campaign: Some(campaign.into()),
            ..Self::default()
        }
    }
}

impl ParameterGroup for AnalyticsParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .text(KEY_SOURCE, &self.source)
            .text(KEY_MEDIUM, &self.medium)
            .text(KEY_CAMPAIGN, &self.campaign)
            .text(KEY_TERM, &self.term)
            .text(KEY_CONTENT, &self.content)
            .finish()
    }
}
