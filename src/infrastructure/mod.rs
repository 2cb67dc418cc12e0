//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`delegate`] - Delegate adapters and the in-memory loopback store

pub mod delegate;
