//! Payloads returned by delegates.

use serde::{Deserialize, Serialize};

/// Result of shortening a long link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,

    /// Non-fatal notices from the shortener (unknown parameters, etc.).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ShortenResponse {
    pub fn new(short_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            warnings: Vec::new(),
        }
    }
}

/// Result of exchanging a short link for its long link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResponse {
    #[serde(rename = "longLink")]
    pub long_link: String,
}

impl ExchangeResponse {
    pub fn new(long_link: impl Into<String>) -> Self {
        Self {
            long_link: long_link.into(),
        }
    }
}
