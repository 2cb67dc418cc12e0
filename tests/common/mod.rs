#![allow(dead_code)]

use durable_links::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

pub const DOMAIN_PREFIX: &str = "https://xyz.example";
pub const ALLOWED_HOST: &str = "xyz.example";

pub fn config() -> Config {
    Config::new(vec![ALLOWED_HOST.to_string()])
}

pub fn components(link: &str) -> LinkComponents {
    LinkComponents::new(Url::parse(link).unwrap(), DOMAIN_PREFIX).unwrap()
}

pub fn links_with(delegate: Arc<dyn LinkDelegate>) -> DurableLinks {
    DurableLinks::new(&config(), Some(delegate))
}

/// Answers every request with a fixed JSON payload, like a remote API would.
#[derive(Default)]
pub struct JsonDelegate {
    pub shorten_body: Option<Value>,
    pub exchange_body: Option<Value>,
    pub calls: AtomicUsize,
    pub last_long_url: std::sync::Mutex<Option<Url>>,
}

impl JsonDelegate {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LinkDelegate for JsonDelegate {
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResponse>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_long_url.lock().unwrap() = Some(long_url);

        match self.shorten_body.clone().map(serde_json::from_value) {
            Some(Ok(response)) => completion.succeed(response),
            Some(Err(e)) => completion.fail(e),
            None => completion.complete(None, None),
        };
    }

    fn exchange_short_code(
        &self,
        _requested_link: Url,
        completion: Completion<ExchangeResponse>,
    ) {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.exchange_body.clone().map(serde_json::from_value) {
            Some(Ok(response)) => completion.succeed(response),
            Some(Err(e)) => completion.fail(e),
            None => completion.complete(None, None),
        };
    }
}

/// Invokes every callback twice: first with a value, then with an error.
pub struct DoubleCallbackDelegate {
    pub short_url: String,
    pub long_link: String,
}

impl LinkDelegate for DoubleCallbackDelegate {
    fn shorten_url(&self, _long_url: Url, completion: Completion<ShortenResponse>) {
        completion.succeed(ShortenResponse::new(self.short_url.clone()));
        completion.fail("second callback");
    }

    fn exchange_short_code(
        &self,
        _requested_link: Url,
        completion: Completion<ExchangeResponse>,
    ) {
        completion.succeed(ExchangeResponse::new(self.long_link.clone()));
        completion.fail("second callback");
    }
}

/// Completes from a plain OS thread after a delay.
pub struct ThreadedDelegate {
    pub delay: Duration,
}

impl LinkDelegate for ThreadedDelegate {
    fn shorten_url(&self, long_url: Url, completion: Completion<ShortenResponse>) {
        let delay = self.delay;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let code = long_url.query().map(|q| q.len()).unwrap_or_default();
            completion.succeed(ShortenResponse::new(format!("{DOMAIN_PREFIX}/{code}")));
        });
    }

    fn exchange_short_code(&self, requested_link: Url, completion: Completion<ExchangeResponse>) {
        let delay = self.delay;
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            completion.succeed(ExchangeResponse::new(format!(
                "{DOMAIN_PREFIX}/?link={}",
                urlencoding::encode(requested_link.as_str())
            )));
        });
    }
}

/// Drops every completion without answering.
pub struct SilentDelegate;

impl LinkDelegate for SilentDelegate {
    fn shorten_url(&self, _long_url: Url, _completion: Completion<ShortenResponse>) {}

    fn exchange_short_code(
        &self,
        _requested_link: Url,
        _completion: Completion<ExchangeResponse>,
    ) {
    }
}
