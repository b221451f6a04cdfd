//! Provider port giving read access to the host's configured installations.

use crate::installation::domain::SonarInstallation;
use std::sync::Arc;
use thiserror::Error;

/// Result type for installation provider operations.
pub type InstallationProviderResult<T> = Result<T, InstallationProviderError>;

/// Read access to the installations held by the host configuration store.
///
/// The host owns the collection and its ordering. Implementations must
/// return installations in the order the host stores them.
#[cfg_attr(test, mockall::automock)]
pub trait InstallationProvider: Send + Sync {
    /// Returns every configured installation in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::HostUnavailable`] when the host
    /// has not finished starting, or [`InstallationProviderError::Store`]
    /// when the store cannot be read.
    fn installations(&self) -> InstallationProviderResult<Vec<SonarInstallation>>;
}

/// Errors returned by installation provider implementations.
#[derive(Debug, Clone, Error)]
pub enum InstallationProviderError {
    /// The host runtime is not available.
    #[error("host configuration is not available")]
    HostUnavailable,

    /// An installation with the same name is already configured.
    #[error("duplicate installation name: {0}")]
    DuplicateName(String),

    /// Store-layer failure.
    #[error("installation store error: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),
}

impl InstallationProviderError {
    /// Wraps a store error.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }
}
