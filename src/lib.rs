//! # Durable Links
//!
//! Build long "durable links" carrying typed metadata, exchange them for short
//! links through a host-supplied transport, and resolve incoming short links
//! back into their metadata.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link components, parameter groups, encoder and delegate traits
//! - **Application Layer** ([`application`]) - Validation, callback bridging and the [`DurableLinks`] service
//! - **Infrastructure Layer** ([`infrastructure`]) - Delegate adapters and an in-memory loopback store
//!
//! ## Flows
//!
//! Build: fill [`LinkComponents`] → [`LinkComponents::url`] encodes the long
//! link → [`DurableLinks::shorten`] hands it to the delegate.
//!
//! Resolve: [`DurableLinks::handle_durable_link`] validates the incoming URL
//! against the allow-list → the delegate exchanges it → the long link is
//! parsed into a [`DurableLink`].
//!
//! ## Quick Start
//!
//! ```ignore
//! let setup = DurableLinksSetup::global();
//! let links = setup.configure(
//!     Config::new(vec!["xyz.example".to_string()]),
//!     Some(Arc::new(SpawnedDelegate::new(my_transport))),
//! )?;
//!
//! let components = LinkComponents::new(
//!     Url::parse("https://example.com/page")?,
//!     "https://xyz.example",
//! )?;
//! let short = links.shorten(&components).await?;
//! ```
//!
//! ## Configuration
//!
//! The allow-list and default domain prefix can be loaded from environment
//! variables via [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use application::services::DurableLinks;
pub use config::Config;
pub use domain::entities::{DurableLink, LinkComponents};
pub use error::DurableLinkError;
pub use state::DurableLinksSetup;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DurableLinks, LinkValidator};
    pub use crate::config::Config;
    pub use crate::domain::delegate::{AsyncLinkDelegate, Completion, LinkDelegate};
    pub use crate::domain::entities::{
        DomainPrefixError, DurableLink, ExchangeResponse, LinkComponents, ShortenResponse,
    };
    pub use crate::domain::parameters::{
        AnalyticsParameters, AndroidParameters, IosParameters, ItunesConnectAnalyticsParameters,
        OptionsParameters, OtherPlatformParameters, PathLength, SocialMetaTagParameters,
    };
    pub use crate::error::{BoxError, DurableLinkError};
    pub use crate::infrastructure::delegate::{InMemoryDelegate, SpawnedDelegate};
    pub use crate::state::DurableLinksSetup;
}
