//! In-memory installation store for tests and embedding hosts.

use std::sync::{Arc, RwLock};

use crate::installation::{
    domain::SonarInstallation,
    ports::{InstallationProvider, InstallationProviderError, InstallationProviderResult},
};

/// Thread-safe, insertion-ordered installation store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInstallationStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    installations: Vec<SonarInstallation>,
    unavailable: bool,
}

impl InMemoryInstallationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given installations in order.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::DuplicateName`] when two
    /// installations share a name.
    pub fn with_installations(
        installations: impl IntoIterator<Item = SonarInstallation>,
    ) -> InstallationProviderResult<Self> {
        let store = Self::new();
        store.replace_all(installations)?;
        Ok(store)
    }

    /// Appends an installation.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::DuplicateName`] when an
    /// installation with the same name is already stored.
    pub fn add(&self, installation: SonarInstallation) -> InstallationProviderResult<()> {
        let mut state = self.state.write().map_err(|err| {
            InstallationProviderError::store(std::io::Error::other(err.to_string()))
        })?;

        if let Some(name) = installation.name()
            && state
                .installations
                .iter()
                .any(|existing| existing.name() == Some(name))
        {
            return Err(InstallationProviderError::DuplicateName(name.to_owned()));
        }

        state.installations.push(installation);
        Ok(())
    }

    /// Replaces the whole list, as the host does when its configuration
    /// form is saved. The previous list is kept if the new one is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::DuplicateName`] when two
    /// installations in the new list share a name.
    pub fn replace_all(
        &self,
        installations: impl IntoIterator<Item = SonarInstallation>,
    ) -> InstallationProviderResult<()> {
        let mut accepted: Vec<SonarInstallation> = Vec::new();
        for installation in installations {
            if let Some(name) = installation.name()
                && accepted.iter().any(|existing| existing.name() == Some(name))
            {
                return Err(InstallationProviderError::DuplicateName(name.to_owned()));
            }
            accepted.push(installation);
        }

        let mut state = self.state.write().map_err(|err| {
            InstallationProviderError::store(std::io::Error::other(err.to_string()))
        })?;
        state.installations = accepted;
        Ok(())
    }

    /// Makes subsequent reads report the host as unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::Store`] when the lock is
    /// poisoned.
    pub fn mark_unavailable(&self) -> InstallationProviderResult<()> {
        self.set_unavailable(true)
    }

    /// Makes subsequent reads succeed again.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationProviderError::Store`] when the lock is
    /// poisoned.
    pub fn mark_available(&self) -> InstallationProviderResult<()> {
        self.set_unavailable(false)
    }

    fn set_unavailable(&self, unavailable: bool) -> InstallationProviderResult<()> {
        let mut state = self.state.write().map_err(|err| {
            InstallationProviderError::store(std::io::Error::other(err.to_string()))
        })?;
        state.unavailable = unavailable;
        Ok(())
    }
}

impl InstallationProvider for InMemoryInstallationStore {
    fn installations(&self) -> InstallationProviderResult<Vec<SonarInstallation>> {
        let state = self.state.read().map_err(|err| {
            InstallationProviderError::store(std::io::Error::other(err.to_string()))
        })?;
        if state.unavailable {
            return Err(InstallationProviderError::HostUnavailable);
        }
        Ok(state.installations.clone())
    }
}
