mod common;

use common::{DoubleCallbackDelegate, JsonDelegate, ThreadedDelegate};
use durable_links::prelude::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

fn incoming(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[tokio::test]
async fn test_exchange_success() {
    let delegate = Arc::new(JsonDelegate {
        exchange_body: Some(json!({
            "longLink": "https://xyz.example/?link=https%3A%2F%2Fexample.com%2Fpage&utm_source=sms"
        })),
        ..JsonDelegate::default()
    });
    let links = common::links_with(delegate.clone());

    let link = links
        .handle_durable_link(&incoming("https://xyz.example/AbC1"))
        .await
        .unwrap();

    assert_eq!(
        link.deep_link().unwrap().as_str(),
        "https://example.com/page"
    );
    assert_eq!(link.utm_parameters()["utm_source"], "sms");
    assert_eq!(delegate.calls(), 1);
}

#[tokio::test]
async fn test_invalid_link_never_reaches_delegate() {
    let delegate = Arc::new(JsonDelegate::default());
    let links = common::links_with(delegate.clone());

    for url in [
        "https://xyz.example/",
        "https://other.example/AbC1",
        "https://sub.xyz.example/AbC1",
    ] {
        let err = links.handle_durable_link(&incoming(url)).await.unwrap_err();
        assert!(matches!(err, DurableLinkError::InvalidDurableLink), "{url}");
    }

    assert_eq!(delegate.calls(), 0);
}

#[tokio::test]
async fn test_exchange_without_delegate() {
    let links = DurableLinks::new(&common::config(), None);

    let err = links
        .handle_durable_link(&incoming("https://xyz.example/AbC1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DurableLinkError::DelegateUnavailable));
}

#[tokio::test]
async fn test_exchange_double_callback_resolves_with_first() {
    let links = common::links_with(Arc::new(DoubleCallbackDelegate {
        short_url: String::new(),
        long_link: "https://xyz.example/?link=https%3A%2F%2Fexample.com%2Ffirst".to_string(),
    }));

    let link = links
        .handle_durable_link(&incoming("https://xyz.example/AbC1"))
        .await
        .unwrap();
    assert_eq!(
        link.deep_link().unwrap().as_str(),
        "https://example.com/first"
    );
}

#[tokio::test]
async fn test_exchange_unparseable_long_link() {
    let links = common::links_with(Arc::new(JsonDelegate {
        exchange_body: Some(json!({ "longLink": "::not a url::" })),
        ..JsonDelegate::default()
    }));

    let err = links
        .handle_durable_link(&incoming("https://xyz.example/AbC1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DurableLinkError::UnknownDelegateResponse));
}

#[tokio::test]
async fn test_exchange_completed_from_other_thread() {
    let links = common::links_with(Arc::new(ThreadedDelegate {
        delay: Duration::from_millis(10),
    }));

    let link = links
        .handle_durable_link(&incoming("https://xyz.example/AbC1"))
        .await
        .unwrap();
    assert_eq!(
        link.deep_link().unwrap().as_str(),
        "https://xyz.example/AbC1"
    );
}

#[tokio::test]
async fn test_exchange_unknown_code_in_store() {
    let store = InMemoryDelegate::new(common::DOMAIN_PREFIX).unwrap();
    let links = common::links_with(Arc::new(SpawnedDelegate::new(store)));

    let err = links
        .handle_durable_link(&incoming("https://xyz.example/missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, DurableLinkError::Delegate(_)));
    assert_eq!(
        err.to_string(),
        "Delegate request failed: Short link not found: https://xyz.example/missing"
    );
}
