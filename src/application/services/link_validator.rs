//! Decides whether an incoming URL is a durable short link for this app.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// A `/` followed by at least one non-`/` character, anywhere in the path.
static SHORT_LINK_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[^/]+").expect("short link path pattern is valid"));

/// Validates incoming links against an allow-list of hosts.
///
/// # Rules
///
/// 1. The URL has a non-empty host
/// 2. The host is an exact member of the allow-list (no wildcards, no subdomains).
///    Entries are lowercased on construction, matching how [`Url`] stores hosts.
/// 3. The path contains at least one non-empty segment (`/abc123` passes, `/` fails)
#[derive(Debug, Clone)]
pub struct LinkValidator {
    allowed_hosts: Vec<String>,
}

impl LinkValidator {
    pub fn new(allowed_hosts: Vec<String>) -> Self {
        Self {
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|host| host.to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    /// Returns true if the URL's host is on the allow-list.
    pub fn is_allowed_host(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) if !host.is_empty() => self.allowed_hosts.iter().any(|h| h == host),
            _ => false,
        }
    }

    /// Returns true if the URL's path has at least one non-empty segment.
    pub fn has_short_link_path(url: &Url) -> bool {
        SHORT_LINK_PATH_REGEX.is_match(url.path())
    }

    /// Returns true if the URL passes every rule.
    pub fn is_valid_durable_link(&self, url: &Url) -> bool {
        let allowed = self.is_allowed_host(url);
        let short_link_path = Self::has_short_link_path(url);

        if !allowed {
            tracing::debug!(url = %url, "Rejected durable link: host not allowed");
        } else if !short_link_path {
            tracing::debug!(url = %url, "Rejected durable link: missing short code path");
        }

        allowed && short_link_path
    }
}
