//! Services for the application layer.

pub mod durable_links;
pub mod exchange_bridge;
pub mod link_validator;

pub use durable_links::DurableLinks;
pub use exchange_bridge::bridge;
pub use link_validator::LinkValidator;
