//! Adapter from [`AsyncLinkDelegate`] to the callback-style [`LinkDelegate`].

use std::sync::Arc;

use crate::domain::delegate::{AsyncLinkDelegate, Completion, LinkDelegate};
use crate::domain::entities::{ExchangeResponse, ShortenResponse};
use crate::error::BoxError;
use tokio::runtime::Handle;
use url::Url;

/// Runs each request of an [`AsyncLinkDelegate`] as a tokio task and
/// completes the callback with its outcome.
///
/// Called outside a tokio runtime, the request fails immediately instead of
/// panicking.
pub struct SpawnedDelegate<D> {
    inner: Arc<D>,
}

impl<D: AsyncLinkDelegate> SpawnedDelegate<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn from_arc(inner: Arc<D>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &Arc<D> {
        &self.inner
    }
}

impl<D: AsyncLinkDelegate> LinkDelegate for SpawnedDelegate<D> {
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResponse>) {
        let Some(handle) = current_runtime(&completion) else {
            return;
        };
        let inner = Arc::clone(&self.inner);

        handle.spawn(async move {
            deliver(&completion, inner.shorten_url(long_url).await);
        });
    }

    fn exchange_short_code(&self, requested_link: Url, completion: Completion<ExchangeResponse>) {
        let Some(handle) = current_runtime(&completion) else {
            return;
        };
        let inner = Arc::clone(&self.inner);

        handle.spawn(async move {
            deliver(&completion, inner.exchange_short_code(requested_link).await);
        });
    }
}

fn current_runtime<T>(completion: &Completion<T>) -> Option<Handle> {
    match Handle::try_current() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Delegate called outside a tokio runtime: {}", e);
            completion.fail(e);
            None
        }
    }
}

fn deliver<T>(completion: &Completion<T>, result: Result<T, BoxError>) {
    match result {
        Ok(value) => completion.succeed(value),
        Err(error) => completion.fail(error),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::bridge;
    use async_trait::async_trait;

    struct FixedDelegate;

    #[async_trait]
    impl AsyncLinkDelegate for FixedDelegate {
        async fn shorten_url(&self, long_url: Url) -> Result<ShortenResponse, BoxError> {
            Ok(ShortenResponse::new(format!(
                "https://{}/abc1",
                long_url.host_str().unwrap_or_default()
            )))
        }

        async fn exchange_short_code(
            &self,
            _requested_link: Url,
        ) -> Result<ExchangeResponse, BoxError> {
            Err("not found".into())
        }
    }

    #[tokio::test]
    async fn test_spawned_shorten() {
        let delegate = SpawnedDelegate::new(FixedDelegate);
        let long_url = Url::parse("https://xyz.example/?link=x").unwrap();

        let response = bridge(|c| delegate.shorten_url(long_url, c), Some)
            .await
            .unwrap();
        assert_eq!(response.short_url, "https://xyz.example/abc1");
    }

    #[tokio::test]
    async fn test_spawned_exchange_error() {
        let delegate = SpawnedDelegate::new(FixedDelegate);
        let short = Url::parse("https://xyz.example/abc1").unwrap();

        let err = bridge(|c| delegate.exchange_short_code(short, c), Some)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Delegate request failed: not found");
    }

    #[test]
    fn test_outside_runtime_fails_completion() {
        let delegate = SpawnedDelegate::new(FixedDelegate);
        let (completion, mut rx) = Completion::channel();

        delegate.shorten_url(Url::parse("https://xyz.example/").unwrap(), completion);

        let (value, error) = rx.try_recv().unwrap();
        assert!(value.is_none());
        assert!(error.is_some());
    }
}
