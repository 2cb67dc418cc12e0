//! Domain layer: durable link model, metadata groups and capability traits.
//!
//! # Architecture
//!
//! - [`parameters`] - Typed metadata groups and their wire keys
//! - [`entities`] - Link components, resolved links and delegate payloads
//! - [`link_encoder`] - Components to long link
//! - [`delegate`] - Transport seams implemented by the host
//!
//! # Design Principles
//!
//! - Domain layer has no knowledge of any concrete transport
//! - Delegate traits define contracts implemented by the host or by
//!   [`crate::infrastructure`]
//! - Orchestration lives in [`crate::application::services`]

pub mod delegate;
pub mod entities;
pub mod link_encoder;
pub mod parameters;
