//! Shortening and resolving durable links through the wired delegate.

use std::fmt;
use std::sync::Arc;

use crate::application::services::exchange_bridge::bridge;
use crate::application::services::link_validator::LinkValidator;
use crate::config::Config;
use crate::domain::delegate::LinkDelegate;
use crate::domain::entities::{DurableLink, LinkComponents, ShortenResponse};
use crate::error::DurableLinkError;
use url::Url;

/// Entry point for building and resolving durable links.
///
/// Holds the validated allow-list and the optional delegate. Read-only once
/// constructed, so a single instance can be shared across tasks behind an
/// [`Arc`]. Usually obtained from [`crate::DurableLinksSetup::configure`].
pub struct DurableLinks {
    validator: LinkValidator,
    delegate: Option<Arc<dyn LinkDelegate>>,
}

impl fmt::Debug for DurableLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurableLinks")
            .field("validator", &self.validator)
            .field("delegate", &self.has_delegate())
            .finish()
    }
}

impl DurableLinks {
    pub const SDK_VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Creates a new instance from configuration and an optional delegate.
    pub fn new(config: &Config, delegate: Option<Arc<dyn LinkDelegate>>) -> Self {
        Self {
            validator: LinkValidator::new(config.allowed_hosts.clone()),
            delegate,
        }
    }

    pub fn validator(&self) -> &LinkValidator {
        &self.validator
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Returns true if `url` is a durable short link for the configured hosts.
    pub fn is_valid_durable_link(&self, url: &Url) -> bool {
        self.validator.is_valid_durable_link(url)
    }

    /// Encodes `components` and hands the long link to the delegate.
    ///
    /// # Errors
    ///
    /// - [`DurableLinkError::DelegateUnavailable`] if no delegate is wired
    /// - [`DurableLinkError::InvalidDurableLink`] if the components do not encode
    /// - [`DurableLinkError::Delegate`] with the transport's error
    /// - [`DurableLinkError::UnknownDelegateResponse`] if the delegate answers with nothing
    pub async fn shorten(
        &self,
        components: &LinkComponents,
    ) -> Result<ShortenResponse, DurableLinkError> {
        let delegate = self.delegate()?;

        let long_url = components
            .url()
            .ok_or(DurableLinkError::InvalidDurableLink)?;

        tracing::debug!(long_url = %long_url, "Shortening durable link");

        bridge(|completion| delegate.shorten_url(long_url, completion), Some).await
    }

    /// Validates an incoming short link and exchanges it for its long link.
    ///
    /// # Errors
    ///
    /// - [`DurableLinkError::InvalidDurableLink`] if the URL fails validation
    /// - [`DurableLinkError::DelegateUnavailable`] if no delegate is wired
    /// - [`DurableLinkError::Delegate`] with the transport's error
    /// - [`DurableLinkError::UnknownDelegateResponse`] if the delegate answers
    ///   with nothing, or with a long link that is not a URL
    pub async fn handle_durable_link(
        &self,
        incoming_url: &Url,
    ) -> Result<DurableLink, DurableLinkError> {
        if !self.is_valid_durable_link(incoming_url) {
            return Err(DurableLinkError::InvalidDurableLink);
        }

        let delegate = self.delegate()?;

        tracing::debug!(url = %incoming_url, "Exchanging short link");

        bridge(
            |completion| delegate.exchange_short_code(incoming_url.clone(), completion),
            |response| DurableLink::parse(&response.long_link),
        )
        .await
    }

    fn delegate(&self) -> Result<&Arc<dyn LinkDelegate>, DurableLinkError> {
        self.delegate.as_ref().ok_or_else(|| {
            tracing::warn!("No delegate configured, cannot reach the link service");
            DurableLinkError::DelegateUnavailable
        })
    }
}
