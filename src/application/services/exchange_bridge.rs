//! Turns a single-shot callback operation into an awaitable result.
//!
//! The caller is suspended until the delegate invokes its [`Completion`] (or
//! drops every clone of it). Exactly one resolution is observed, whatever the
//! delegate does afterwards.
//!
//! # Resolution
//!
//! | value parses | error supplied | result |
//! |---|---|---|
//! | yes | any | `Ok(value)` |
//! | no / absent | yes | `Err(Delegate(error))` |
//! | no / absent | no | `Err(UnknownDelegateResponse)` |
//!
//! No retries, timeouts or cancellation happen here.

use crate::domain::delegate::{Completion, Outcome};
use crate::error::DurableLinkError;

/// Issues `call` with a fresh completion and awaits its single resolution.
///
/// `parse` turns the delegate's raw value into the caller's result; a value
/// that does not parse counts as absent.
///
/// # Errors
///
/// See the module-level resolution table.
pub async fn bridge<T, U, C, P>(call: C, parse: P) -> Result<U, DurableLinkError>
where
    C: FnOnce(Completion<T>),
    P: FnOnce(T) -> Option<U>,
{
    let (completion, rx) = Completion::channel();
    call(completion);

    let outcome = match rx.await {
        Ok(outcome) => outcome,
        Err(_) => {
            tracing::debug!("Delegate dropped its completion without responding");
            (None, None)
        }
    };

    resolve(outcome, parse)
}

fn resolve<T, U, P>((value, error): Outcome<T>, parse: P) -> Result<U, DurableLinkError>
where
    P: FnOnce(T) -> Option<U>,
{
    match value.and_then(parse) {
        Some(parsed) => Ok(parsed),
        None => Err(error
            .map(DurableLinkError::Delegate)
            .unwrap_or(DurableLinkError::UnknownDelegateResponse)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_value_resolves() {
        let result = bridge(
            |c: Completion<u32>| {
                c.succeed(7);
            },
            Some,
        )
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_error_resolves() {
        let result = bridge(
            |c: Completion<u32>| {
                c.fail("timeout");
            },
            Some,
        )
        .await;

        match result.unwrap_err() {
            DurableLinkError::Delegate(e) => assert_eq!(e.to_string(), "timeout"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_neither_value_nor_error() {
        let result = bridge(
            |c: Completion<u32>| {
                c.complete(None, None);
            },
            Some,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            DurableLinkError::UnknownDelegateResponse
        ));
    }

    #[tokio::test]
    async fn test_dropped_completion_is_unknown_response() {
        let result = bridge(|c: Completion<u32>| drop(c), Some).await;
        assert!(matches!(
            result.unwrap_err(),
            DurableLinkError::UnknownDelegateResponse
        ));
    }

    #[tokio::test]
    async fn test_usable_value_beats_error() {
        let result = bridge(
            |c: Completion<u32>| {
                c.complete(Some(5), Some("ignored".into()));
            },
            Some,
        )
        .await;
        assert_eq!(result.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_unparseable_value_uses_error() {
        let result = bridge(
            |c: Completion<&str>| {
                c.complete(Some("nope"), Some("bad gateway".into()));
            },
            |v: &str| v.parse::<u32>().ok(),
        )
        .await;

        assert!(matches!(result.unwrap_err(), DurableLinkError::Delegate(_)));
    }

    #[tokio::test]
    async fn test_unparseable_value_without_error() {
        let result = bridge(
            |c: Completion<&str>| {
                c.succeed("nope");
            },
            |v: &str| v.parse::<u32>().ok(),
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            DurableLinkError::UnknownDelegateResponse
        ));
    }

    #[tokio::test]
    async fn test_second_callback_is_ignored() {
        let result = bridge(
            |c: Completion<u32>| {
                c.succeed(1);
                c.fail("too late");
            },
            Some,
        )
        .await;
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_resolves_from_another_task() {
        let result = bridge(
            |c: Completion<u32>| {
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    c.succeed(9);
                });
            },
            Some,
        )
        .await;
        assert_eq!(result.unwrap(), 9);
    }
}
