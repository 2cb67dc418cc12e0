//! The aggregate root handed to the encoder and the shortener.

use crate::domain::link_encoder;
use crate::domain::parameters::{
    AnalyticsParameters, AndroidParameters, IosParameters, ItunesConnectAnalyticsParameters,
    OptionsParameters, OtherPlatformParameters, SocialMetaTagParameters,
};
use url::Url;

/// Reasons a domain prefix is refused at construction.
#[derive(Debug, thiserror::Error)]
pub enum DomainPrefixError {
    #[error("Invalid domain prefix '{prefix}': {reason}")]
    InvalidUrl { prefix: String, reason: String },

    #[error("Domain prefix '{0}' must use the https scheme")]
    InsecureScheme(String),

    #[error("Domain prefix '{0}' must not carry a query or fragment")]
    QueryOrFragment(String),
}

/// A long link plus the metadata groups encoded alongside it.
///
/// The base link and domain prefix are fixed at construction; parameter
/// groups stay public so callers can adjust them before encoding.
/// `ios_parameters` and `options` are always present, every other group
/// defaults to absent.
#[derive(Debug, Clone)]
pub struct LinkComponents {
    link: Url,
    domain_uri_prefix: String,
    pub ios_parameters: IosParameters,
    pub android_parameters: Option<AndroidParameters>,
    pub itunes_connect_parameters: Option<ItunesConnectAnalyticsParameters>,
    pub social_meta_tag_parameters: Option<SocialMetaTagParameters>,
    pub options: OptionsParameters,
    pub other_platform_parameters: Option<OtherPlatformParameters>,
    pub analytics_parameters: Option<AnalyticsParameters>,
}

impl LinkComponents {
    /// Creates components for `link` hosted under `domain_uri_prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainPrefixError::InvalidUrl`] if the prefix does not parse
    /// (including the empty string), [`DomainPrefixError::InsecureScheme`]
    /// if its scheme is not `https` and [`DomainPrefixError::QueryOrFragment`]
    /// if it has a `?` or `#` part the encoded parameters would end up behind.
    pub fn new(link: Url, domain_uri_prefix: &str) -> Result<Self, DomainPrefixError> {
        let prefix_url = Url::parse(domain_uri_prefix).map_err(|e| {
            tracing::warn!(prefix = domain_uri_prefix, "Invalid domain prefix: {}", e);
            DomainPrefixError::InvalidUrl {
                prefix: domain_uri_prefix.to_string(),
                reason: e.to_string(),
            }
        })?;

        // `Url` lowercases the scheme while parsing.
        if prefix_url.scheme() != "https" {
            tracing::warn!(
                prefix = domain_uri_prefix,
                "Invalid domain prefix scheme, https required"
            );
            return Err(DomainPrefixError::InsecureScheme(
                domain_uri_prefix.to_string(),
            ));
        }

        if prefix_url.query().is_some() || prefix_url.fragment().is_some() {
            tracing::warn!(
                prefix = domain_uri_prefix,
                "Domain prefix carries a query or fragment"
            );
            return Err(DomainPrefixError::QueryOrFragment(
                domain_uri_prefix.to_string(),
            ));
        }

        Ok(Self {
            link,
            domain_uri_prefix: domain_uri_prefix.trim_end_matches('/').to_string(),
            ios_parameters: IosParameters::default(),
            android_parameters: None,
            itunes_connect_parameters: None,
            social_meta_tag_parameters: None,
            options: OptionsParameters::default(),
            other_platform_parameters: None,
            analytics_parameters: None,
        })
    }

    pub fn link(&self) -> &Url {
        &self.link
    }

    /// The domain prefix without a trailing slash.
    pub fn domain_uri_prefix(&self) -> &str {
        &self.domain_uri_prefix
    }

    /// The fully encoded long link, or `None` if it does not form a valid URL.
    pub fn url(&self) -> Option<Url> {
        link_encoder::encode(self)
    }

    pub fn with_ios(mut self, params: IosParameters) -> Self {
        self.ios_parameters = params;
        self
    }

    pub fn with_android(mut self, params: AndroidParameters) -> Self {
        self.android_parameters = Some(params);
        self
    }

    pub fn with_itunes_connect(mut self, params: ItunesConnectAnalyticsParameters) -> Self {
        self.itunes_connect_parameters = Some(params);
        self
    }

    pub fn with_social_meta_tags(mut self, params: SocialMetaTagParameters) -> Self {
        self.social_meta_tag_parameters = Some(params);
        self
    }

    pub fn with_options(mut self, params: OptionsParameters) -> Self {
        self.options = params;
        self
    }

    pub fn with_other_platform(mut self, params: OtherPlatformParameters) -> Self {
        self.other_platform_parameters = Some(params);
        self
    }

    pub fn with_analytics(mut self, params: AnalyticsParameters) -> Self {
        self.analytics_parameters = Some(params);
        self
    }
}
