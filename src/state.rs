//! Write-once setup guard for [`DurableLinks`].

use std::sync::{Arc, OnceLock};

use crate::application::services::DurableLinks;
use crate::config::Config;
use crate::domain::delegate::LinkDelegate;
use crate::error::DurableLinkError;

static GLOBAL: DurableLinksSetup = DurableLinksSetup::new();

/// Holds the single configured [`DurableLinks`] instance.
///
/// [`configure`](Self::configure) succeeds exactly once; every later call is
/// rejected with [`DurableLinkError::AlreadyConfigured`]. Readers call
/// [`get`](Self::get) and receive a shared handle.
#[derive(Debug, Default)]
pub struct DurableLinksSetup {
    instance: OnceLock<Arc<DurableLinks>>,
}

impl DurableLinksSetup {
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
        }
    }

    /// The process-wide guard.
    pub fn global() -> &'static DurableLinksSetup {
        &GLOBAL
    }

    /// Configures the instance with an allow-list and optional delegate.
    ///
    /// # Errors
    ///
    /// Returns [`DurableLinkError::AlreadyConfigured`] if called more than once.
    pub fn configure(
        &self,
        config: Config,
        delegate: Option<Arc<dyn LinkDelegate>>,
    ) -> Result<Arc<DurableLinks>, DurableLinkError> {
        if self.instance.get().is_some() {
            return Err(DurableLinkError::AlreadyConfigured);
        }

        let links = Arc::new(DurableLinks::new(&config, delegate));
        self.instance
            .set(Arc::clone(&links))
            .map_err(|_| DurableLinkError::AlreadyConfigured)?;

        tracing::info!(
            allowed_hosts = config.allowed_hosts.len(),
            delegate = links.has_delegate(),
            "DurableLinks configured"
        );

        Ok(links)
    }

    /// Returns the configured instance.
    ///
    /// # Errors
    ///
    /// Returns [`DurableLinkError::NotConfigured`] before [`configure`](Self::configure).
    pub fn get(&self) -> Result<Arc<DurableLinks>, DurableLinkError> {
        self.instance
            .get()
            .cloned()
            .ok_or(DurableLinkError::NotConfigured)
    }

    pub fn is_configured(&self) -> bool {
        self.instance.get().is_some()
    }
}
