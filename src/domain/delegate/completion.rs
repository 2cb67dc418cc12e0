//! One-shot completion handle passed to callback-style delegates.

use crate::error::BoxError;
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// What a delegate reported: a value, an error, both, or neither.
pub(crate) type Outcome<T> = (Option<T>, Option<BoxError>);

/// Callback handed to a [`super::LinkDelegate`].
///
/// Cloneable so transports can move it across threads and tasks, but only the
/// first call to [`Completion::complete`] (or its shorthands) is delivered.
/// Later calls are ignored and return `false`. If every clone is dropped
/// without completing, the waiting caller resolves as if the delegate
/// reported neither a value nor an error.
pub struct Completion<T> {
    sender: Arc<Mutex<Option<oneshot::Sender<Outcome<T>>>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl<T> Completion<T> {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Outcome<T>>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            sender: Arc::new(Mutex::new(Some(tx))),
        };
        (completion, rx)
    }

    /// Delivers the delegate's result.
    ///
    /// Returns `true` if this call resolved the waiting caller, `false` if an
    /// earlier call already did.
    pub fn complete(&self, value: Option<T>, error: Option<BoxError>) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        let Some(sender) = sender else {
            tracing::debug!("Completion invoked more than once, ignoring");
            return false;
        };

        // The waiter may have gone away; the completion is consumed either way.
        let _ = sender.send((value, error));
        true
    }

    pub fn succeed(&self, value: T) -> bool {
        self.complete(Some(value), None)
    }

    pub fn fail(&self, error: impl Into<BoxError>) -> bool {
        self.complete(None, Some(error.into()))
    }

    pub fn is_resolved(&self) -> bool {
        match self.sender.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}
