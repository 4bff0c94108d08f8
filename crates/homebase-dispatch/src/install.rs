//! Install gate.
//!
//! Shortcuts that depend on another app check it is installed first. When it
//! is not, the user is sent to the app store listing and the tap ends there.

use std::sync::Arc;

use crate::error::DispatchError;
use crate::platform::{Linking, Notifier, PackageManager};

/// Result of checking a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    /// Installed; the action may run.
    Installed,
    /// Missing; the store listing was opened instead.
    Redirected,
}

/// Checks dependencies and redirects to the store for missing ones.
#[derive(Clone)]
pub struct InstallGate {
    packages: Arc<dyn PackageManager>,
    linking: Arc<dyn Linking>,
    notifier: Arc<dyn Notifier>,
    store_url_prefix: String,
}

impl InstallGate {
    pub fn new(
        packages: Arc<dyn PackageManager>,
        linking: Arc<dyn Linking>,
        notifier: Arc<dyn Notifier>,
        store_url_prefix: impl Into<String>,
    ) -> Self {
        Self {
            packages,
            linking,
            notifier,
            store_url_prefix: store_url_prefix.into(),
        }
    }

    /// App store URL for `package`.
    pub fn store_url(&self, package: &str) -> String {
        format!("{}{}", self.store_url_prefix, package)
    }

    /// Check `package`, redirecting to the store when it is missing.
    ///
    /// Only an explicit "not installed" answer redirects. A failed query is
    /// returned as an error without redirecting.
    pub async fn check(&self, package: &str) -> Result<InstallStatus, DispatchError> {
        match self.packages.is_installed(package).await {
            Ok(true) => Ok(InstallStatus::Installed),
            Ok(false) => {
                tracing::warn!("Pkg not installed: {}", package);
                self.redirect_to_store(package).await;
                Ok(InstallStatus::Redirected)
            }
            Err(source) => Err(DispatchError::InstallCheck {
                package: package.to_string(),
                source,
            }),
        }
    }

    /// Open the store listing for `package`.
    ///
    /// Fire-and-forget: a failure is reported and never retried.
    pub async fn redirect_to_store(&self, package: &str) {
        let url = self.store_url(package);
        tracing::debug!("Redirecting to store: {}", url);
        if let Err(e) = self.linking.open_url(&url).await {
            tracing::warn!("Store redirect for {} failed: {}", package, e);
            self.notifier
                .alert(&format!("Unable to install package: {}", package));
        }
    }
}
