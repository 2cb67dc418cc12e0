//! Core domain entities.
//!
//! - [`LinkComponents`] - A long link plus metadata, ready to encode
//! - [`DurableLink`] - A resolved link returned after an exchange
//! - [`ShortenResponse`], [`ExchangeResponse`] - Delegate payloads

pub mod components;
pub mod durable_link;
pub mod responses;

pub use components::{DomainPrefixError, LinkComponents};
pub use durable_link::DurableLink;
pub use responses::{ExchangeResponse, ShortenResponse};
