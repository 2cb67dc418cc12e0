use super::{ParameterGroup, QueryPairs};

pub const KEY_AFFILIATE_TOKEN: &str = "at";
pub const KEY_CAMPAIGN_TOKEN: &str = "ct";
pub const KEY_PROVIDER_TOKEN: &str = "pt";

/// App Store affiliate and campaign tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItunesConnectAnalyticsParameters {
    pub affiliate_token: Option<String>,
    pub campaign_token: Option<String>,
    pub provider_token: Option<String>,
}

impl ParameterGroup for ItunesConnectAnalyticsParameters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        QueryPairs::new()
            .text(KEY_AFFILIATE_TOKEN, &self.affiliate_token)
            .text(KEY_CAMPAIGN_TOKEN, &self.campaign_token)
            .text(KEY_PROVIDER_TOKEN, &self.provider_token)
            .finish()
    }
}
