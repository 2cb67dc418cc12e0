//! Application layer services orchestrating the domain.
//!
//! # Available Services
//!
//! - [`services::durable_links::DurableLinks`] - Shorten and resolve durable links
//! - [`services::link_validator::LinkValidator`] - Allow-list and path checks
//! - [`services::exchange_bridge`] - Callback to future bridging

pub mod services;
