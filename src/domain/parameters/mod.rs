//! Typed metadata bundles attached to a durable link.
//!
//! Each group is a plain struct of optional fields with a fixed table of wire
//! keys declared as constants. Groups serialize themselves through
//! [`ParameterGroup::query_pairs`]; fields without a value contribute nothing.
//!
//! # Groups
//!
//! - [`IosParameters`] - iOS / iPadOS app routing
//! - [`AndroidParameters`] - Android app routing
//! - [`ItunesConnectAnalyticsParameters`] - App Store affiliate tokens
//! - [`SocialMetaTagParameters`] - link preview metadata
//! - [`OtherPlatformParameters`] - fallback for unsupported platforms
//! - [`AnalyticsParameters`] - UTM campaign tags
//! - [`OptionsParameters`] - short-code generation options

mod analytics;
mod android;
mod ios;
mod itunes_connect;
mod options;
mod other_platform;
mod social;

pub use analytics::AnalyticsParameters;
pub use android::AndroidParameters;
pub use ios::IosParameters;
pub use itunes_connect::ItunesConnectAnalyticsParameters;
pub use options::{OptionsParameters, PathLength, UnknownPathLength};
pub use other_platform::OtherPlatformParameters;
pub use social::SocialMetaTagParameters;

use url::Url;

/// A metadata bundle that can be flattened into query parameters.
pub trait ParameterGroup {
    /// Returns the `(wire key, wire value)` pairs for every field that holds a value.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Accumulates wire pairs while skipping absent fields.
#[derive(Debug, Default)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn text(mut self, key: &'static str, value: &Option<String>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.clone()));
        }
        self
    }

    pub(crate) fn url(mut self, key: &'static str, value: &Option<Url>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.as_str().to_string()));
        }
        self
    }

    pub(crate) fn integer(mut self, key: &'static str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub(crate) fn literal(mut self, key: &'static str, value: &'static str) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn finish(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}
