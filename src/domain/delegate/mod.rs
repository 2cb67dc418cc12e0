//! Capability interfaces implemented by the host application.
//!
//! The crate never talks to a network itself. Shortening a long link and
//! exchanging a short link are delegated to the host through one of two seams:
//!
//! - [`LinkDelegate`] - callback style; the delegate receives a
//!   [`Completion`] and invokes it once the transport answers
//! - [`AsyncLinkDelegate`] - async style; adapt it with
//!   [`crate::infrastructure::delegate::SpawnedDelegate`]
//!
//! Neither seam carries retries, timeouts or cancellation. Once a remote call
//! is issued the crate cannot abort it; that belongs to the transport.

mod completion;

pub use completion::Completion;
pub(crate) use completion::Outcome;

use crate::domain::entities::{ExchangeResponse, ShortenResponse};
use crate::error::BoxError;
use async_trait::async_trait;
use url::Url;

/// Callback-style transport for the two remote operations.
///
/// Implementations must eventually call the completion (or drop it); the
/// awaiting caller stays suspended until one of those happens.
///
/// # Implementations
///
/// - [`crate::infrastructure::delegate::SpawnedDelegate`] - adapts an [`AsyncLinkDelegate`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkDelegate: Send + Sync {
    /// Requests a short link for a fully encoded long link.
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResponse>);

    /// Requests the long link behind an incoming short link.
    fn exchange_short_code(&self, requested_link: Url, completion: Completion<ExchangeResponse>);
}

/// Async transport for the two remote operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::delegate::InMemoryDelegate`] - loopback store for development and tests
#[async_trait]
pub trait AsyncLinkDelegate: Send + Sync + 'static {
    /// Returns a short link for a fully encoded long link.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    async fn shorten_url(&self, long_url: Url) -> Result<ShortenResponse, BoxError>;

    /// Returns the long link behind an incoming short link.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged.
    async fn exchange_short_code(&self, requested_link: Url) -> Result<ExchangeResponse, BoxError>;
}
