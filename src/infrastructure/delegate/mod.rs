//! Delegate implementations shipped with the crate.
//!
//! - [`SpawnedDelegate`] - Runs an [`crate::domain::delegate::AsyncLinkDelegate`] on tokio
//! - [`InMemoryDelegate`] - Loopback store for development and tests

mod in_memory;
mod spawned;

pub use in_memory::{InMemoryDelegate, InMemoryDelegateError};
pub use spawned::SpawnedDelegate;
