//! Service layer for resolving configured installations.
//!
//! Provides [`InstallationLookup`], which lists every installation the host
//! has configured and resolves one by name.

use crate::installation::{domain::SonarInstallation, ports::InstallationProvider};
use std::sync::Arc;

/// Name-based resolution over the host's configured installations.
///
/// A lookup without a provider behaves as if nothing is configured. This is
/// the state outside a running host, such as in isolated tests.
#[derive(Debug)]
pub struct InstallationLookup<P>
where
    P: InstallationProvider,
{
    provider: Option<Arc<P>>,
}

impl<P> Clone for InstallationLookup<P>
where
    P: InstallationProvider,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

impl<P> InstallationLookup<P>
where
    P: InstallationProvider,
{
    /// Creates a lookup backed by the host's installation provider.
    #[must_use]
    pub const fn new(provider: Arc<P>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Creates a lookup with no host attached.
    #[must_use]
    pub const fn detached() -> Self {
        Self { provider: None }
    }

    /// Returns every configured installation, in the host's order.
    ///
    /// Yields an empty list when no host is attached or the host cannot
    /// supply its configuration.
    #[must_use]
    pub fn all(&self) -> Vec<SonarInstallation> {
        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!("no host attached, no installations available");
            return Vec::new();
        };

        provider.installations().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to read configured installations");
            Vec::new()
        })
    }

    /// Resolves an installation by name.
    ///
    /// An absent or empty name selects the first configured installation.
    /// Otherwise the first installation whose name matches exactly is
    /// returned. Returns `None` when nothing matches or nothing is
    /// configured.
    #[must_use]
    pub fn get(&self, name: Option<&str>) -> Option<SonarInstallation> {
        let available = self.all();

        if name.is_none_or(str::is_empty) {
            let first = available.into_iter().next();
            if let Some(installation) = first.as_ref() {
                tracing::debug!(
                    installation = installation.name().unwrap_or_default(),
                    "no installation name given, using the first configured"
                );
            }
            return first;
        }

        available
            .into_iter()
            .find(|installation| installation.name() == name)
    }
}
