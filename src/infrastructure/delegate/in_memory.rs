//! Loopback delegate that keeps issued short links in memory.

use std::collections::HashMap;

use crate::domain::delegate::AsyncLinkDelegate;
use crate::domain::entities::{DurableLink, ExchangeResponse, ShortenResponse};
use crate::error::BoxError;
use crate::utils::code_generator::{code_length, generate_code};
use async_trait::async_trait;
use tokio::sync::RwLock;
use url::Url;

const MAX_ATTEMPTS: usize = 10;

/// Errors raised by [`InMemoryDelegate`].
#[derive(Debug, thiserror::Error)]
pub enum InMemoryDelegateError {
    #[error("Domain prefix must be an https URL, got '{0}'")]
    InvalidDomainPrefix(String),

    #[error("Short link not found: {0}")]
    NotFound(String),

    #[error("Failed to generate a unique short code")]
    CodeSpaceExhausted,

    #[error("Random source unavailable: {0}")]
    Entropy(String),
}

#[derive(Default)]
struct Store {
    by_code: HashMap<String, String>,
    by_long_url: HashMap<String, String>,
}

/// Issues and resolves short links without any network.
///
/// Intended for development and tests. Short links are
/// `<domain prefix>/<code>`; the code length follows the long link's
/// `pathLength` parameter. Shortening the same long link twice returns the
/// same short link.
pub struct InMemoryDelegate {
    domain_uri_prefix: String,
    store: RwLock<Store>,
}

impl InMemoryDelegate {
    /// Creates an empty store issuing links under `domain_uri_prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`InMemoryDelegateError::InvalidDomainPrefix`] unless the prefix
    /// is an https URL.
    pub fn new(domain_uri_prefix: &str) -> Result<Self, InMemoryDelegateError> {
        match Url::parse(domain_uri_prefix) {
            Ok(url) if url.scheme() == "https" => Ok(Self {
                domain_uri_prefix: domain_uri_prefix.trim_end_matches('/').to_string(),
                store: RwLock::new(Store::default()),
            }),
            _ => Err(InMemoryDelegateError::InvalidDomainPrefix(
                domain_uri_prefix.to_string(),
            )),
        }
    }

    /// Number of short links issued so far.
    pub async fn len(&self) -> usize {
        self.store.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.domain_uri_prefix, code)
    }
}

#[async_trait]
impl AsyncLinkDelegate for InMemoryDelegate {
    async fn shorten_url(&self, long_url: Url) -> Result<ShortenResponse, BoxError> {
        let path_length = DurableLink::parse(long_url.as_str())
            .and_then(|link| link.path_length())
            .unwrap_or_default();

        let mut store = self.store.write().await;

        if let Some(code) = store.by_long_url.get(long_url.as_str()) {
            return Ok(ShortenResponse::new(self.short_url(code)));
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(code_length(path_length))
                .map_err(|e| InMemoryDelegateError::Entropy(e.to_string()))?;

            if !store.by_code.contains_key(&code) {
                store
                    .by_code
                    .insert(code.clone(), long_url.as_str().to_string());
                store
                    .by_long_url
                    .insert(long_url.as_str().to_string(), code.clone());

                tracing::debug!(code = %code, %path_length, "Issued short link");
                return Ok(ShortenResponse::new(self.short_url(&code)));
            }
        }

        Err(InMemoryDelegateError::CodeSpaceExhausted.into())
    }

    async fn exchange_short_code(&self, requested_link: Url) -> Result<ExchangeResponse, BoxError> {
        let code = requested_link
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .unwrap_or_default();

        let store = self.store.read().await;
        store
            .by_code
            .get(code)
            .map(ExchangeResponse::new)
            .ok_or_else(|| InMemoryDelegateError::NotFound(requested_link.to_string()).into())
    }
}
