//! Utility functions shared across layers.
//!
//! - [`query_string`] - Percent-encoding for long link query strings
//! - [`code_generator`] - Short code generation

pub mod code_generator;
pub mod query_string;
