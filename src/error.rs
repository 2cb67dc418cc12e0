//! Error types surfaced by durable link operations.
//!
//! All kinds are recoverable by the caller. Core operations surface the first
//! failure verbatim; nothing is retried or suppressed inside the crate.

/// Boxed transport error supplied by a delegate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`crate::DurableLinks`] and its one-time setup.
#[derive(Debug, thiserror::Error)]
pub enum DurableLinkError {
    /// An operation was attempted before one-time setup completed.
    #[error("DurableLinks not configured")]
    NotConfigured,

    /// Encoding failed, or an incoming URL failed validation.
    #[error("Invalid durable link")]
    InvalidDurableLink,

    /// No delegate is wired to perform the remote call.
    #[error("Delegate unavailable")]
    DelegateUnavailable,

    /// The delegate completed with neither a usable value nor an error.
    #[error("Unknown response from delegate")]
    UnknownDelegateResponse,

    #[error("No valid URL found in pasteboard")]
    NoUrlInPasteboard,

    #[error(
        "Already checked pasteboard for Durable Link once, further checks will fail immediately as handling now goes through handle_durable_link"
    )]
    AlreadyCheckedPasteboard,

    /// One-time setup was called a second time.
    #[error("DurableLinks already configured")]
    AlreadyConfigured,

    /// The delegate reported a transport error.
    #[error("Delegate request failed: {0}")]
    Delegate(#[source] BoxError),
}

impl DurableLinkError {
    /// Stable numeric code for the error kind.
    ///
    /// Codes follow declaration order and never change between releases,
    /// so hosts can map them across FFI or logging boundaries.
    pub fn code(&self) -> i32 {
        match self {
            DurableLinkError::NotConfigured => 0,
            DurableLinkError::InvalidDurableLink => 1,
            DurableLinkError::DelegateUnavailable => 2,
            DurableLinkError::UnknownDelegateResponse => 3,
            DurableLinkError::NoUrlInPasteboard => 4,
            DurableLinkError::AlreadyCheckedPasteboard => 5,
            DurableLinkError::AlreadyConfigured => 6,
            DurableLinkError::Delegate(_) => 7,
        }
    }

    /// Wraps a transport error reported by a delegate.
    pub fn delegate(error: impl Into<BoxError>) -> Self {
        DurableLinkError::Delegate(error.into())
    }
}
