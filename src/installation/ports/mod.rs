//! Port contracts for installation lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by the lookup
//! service.

mod provider;

pub use provider::{InstallationProvider, InstallationProviderError, InstallationProviderResult};

#[cfg(test)]
pub(crate) use provider::MockInstallationProvider;
