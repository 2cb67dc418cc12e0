//! Configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before it is handed to
//! [`crate::DurableLinksSetup::configure`].
//!
//! ## Allow-list
//!
//! ```bash
//! export DURABLE_LINKS_ALLOWED_HOSTS="go.example.com,links.example.com"
//! export DURABLE_LINKS_DOMAIN_PREFIX="https://go.example.com"
//! ```
//!
//! If `DURABLE_LINKS_ALLOWED_HOSTS` is not set, the allow-list falls back to
//! the host of `DURABLE_LINKS_DOMAIN_PREFIX`.
//!
//! ## Required Variables
//!
//! Either `DURABLE_LINKS_ALLOWED_HOSTS` or `DURABLE_LINKS_DOMAIN_PREFIX`
//!
//! ## Optional Variables
//!
//! - `DURABLE_LINKS_DOMAIN_PREFIX` - Default https domain prefix for generated links
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Durable link configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosts trusted to serve durable short links. Matched exactly.
    pub allowed_hosts: Vec<String>,
    /// Default domain prefix for generated links. Must use https.
    pub domain_uri_prefix: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Creates a configuration with the given allow-list and default logging.
    pub fn new(allowed_hosts: Vec<String>) -> Self {
        Self {
            allowed_hosts,
            domain_uri_prefix: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the allow-list nor the domain prefix is set,
    /// or if the domain prefix has no host.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_domain_prefix(None)
    }

    /// Loads configuration from environment variables, with `domain_prefix`
    /// taking the place of `DURABLE_LINKS_DOMAIN_PREFIX` when given.
    ///
    /// The allow-list still comes from `DURABLE_LINKS_ALLOWED_HOSTS` when set,
    /// and falls back to the host of the effective prefix otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_env_with_domain_prefix(domain_prefix: Option<&str>) -> Result<Self> {
        let domain_uri_prefix = domain_prefix
            .map(str::to_string)
            .or_else(|| env::var("DURABLE_LINKS_DOMAIN_PREFIX").ok())
            .filter(|v| !v.trim().is_empty());

        let allowed_hosts = Self::load_allowed_hosts(domain_uri_prefix.as_deref())
            .context("Failed to load allowed hosts")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            allowed_hosts,
            domain_uri_prefix,
            log_level,
            log_format,
        })
    }

    /// Loads the allow-list with fallback to the domain prefix host.
    ///
    /// Priority:
    /// 1. `DURABLE_LINKS_ALLOWED_HOSTS` (comma separated, blanks dropped)
    /// 2. Host of the domain prefix
    fn load_allowed_hosts(domain_uri_prefix: Option<&str>) -> Result<Vec<String>> {
        if let Ok(list) = env::var("DURABLE_LINKS_ALLOWED_HOSTS") {
            return Ok(list
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect());
        }

        let prefix = domain_uri_prefix.context(
            "DURABLE_LINKS_ALLOWED_HOSTS must be set when DURABLE_LINKS_DOMAIN_PREFIX is not provided",
        )?;
        let host = Url::parse(prefix)
            .context("DURABLE_LINKS_DOMAIN_PREFIX is not a valid URL")?
            .host_str()
            .map(str::to_string)
            .context("DURABLE_LINKS_DOMAIN_PREFIX has no host")?;

        Ok(vec![host])
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the allow-list is empty
    /// - a host contains a scheme, a `/` or whitespace
    /// - the domain prefix is not an https URL, or has a query or fragment
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.allowed_hosts.is_empty() {
            anyhow::bail!("DURABLE_LINKS_ALLOWED_HOSTS must contain at least one host");
        }

        for host in &self.allowed_hosts {
            if host.contains("://") || host.contains('/') || host.chars().any(char::is_whitespace)
            {
                anyhow::bail!(
                    "Allowed hosts must be bare host names (e.g. 'go.example.com'), got '{}'",
                    host
                );
            }
        }

        if let Some(ref prefix) = self.domain_uri_prefix {
            let url = Url::parse(prefix)
                .with_context(|| format!("DURABLE_LINKS_DOMAIN_PREFIX is invalid: '{}'", prefix))?;
            if url.scheme() != "https" {
                anyhow::bail!(
                    "DURABLE_LINKS_DOMAIN_PREFIX must use https, got '{}'",
                    prefix
                );
            }
            if url.query().is_some() || url.fragment().is_some() {
                anyhow::bail!(
                    "DURABLE_LINKS_DOMAIN_PREFIX must not carry a query or fragment, got '{}'",
                    prefix
                );
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Allowed hosts: {}", self.allowed_hosts.join(", "));
        match self.domain_uri_prefix {
            Some(ref prefix) => tracing::info!("  Domain prefix: {}", prefix),
            None => tracing::info!("  Domain prefix: not set"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    load_with_domain_prefix(None)
}

/// Like [`load_from_env`], with an explicit domain prefix overriding
/// `DURABLE_LINKS_DOMAIN_PREFIX`.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_with_domain_prefix(domain_prefix: Option<&str>) -> Result<Config> {
    let config = Config::from_env_with_domain_prefix(domain_prefix)?;
    config.validate()?;
    Ok(config)
}
