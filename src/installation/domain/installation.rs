//! Sonar installation entity.

use super::{InstallationDomainError, ScrambledPassword, TriggersConfig, link};
use serde::{Deserialize, Serialize};

/// Connection profile for one Sonar server.
///
/// Identity and connection fields are fixed at construction. The public URL
/// and Maven plugin version stay mutable so older configurations can be
/// migrated in place. The database password is only ever held scrambled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarInstallation {
    name: Option<String>,
    #[serde(default)]
    disabled: bool,
    server_url: Option<String>,
    server_public_url: Option<String>,
    mojo_version: Option<String>,
    database_url: Option<String>,
    database_driver: Option<String>,
    database_login: Option<String>,
    database_password: Option<ScrambledPassword>,
    additional_properties: Option<String>,
    triggers: Option<TriggersConfig>,
}

/// Full set of user-supplied fields for a new installation.
///
/// This is the shape the host's configuration form binds to. The password
/// is carried in plaintext here and scrambled by
/// [`SonarInstallation::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallationSettings {
    name: Option<String>,
    disabled: bool,
    server_url: Option<String>,
    server_public_url: Option<String>,
    database_url: Option<String>,
    database_driver: Option<String>,
    database_login: Option<String>,
    database_password: Option<String>,
    mojo_version: Option<String>,
    additional_properties: Option<String>,
    triggers: Option<TriggersConfig>,
}

impl InstallationSettings {
    /// Creates settings carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Marks the installation as disabled.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the server base URL.
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Sets the publicly reachable server URL used for links.
    #[must_use]
    pub fn with_server_public_url(mut self, url: impl Into<String>) -> Self {
        self.server_public_url = Some(url.into());
        self
    }

    /// Sets the database JDBC URL, driver class and login.
    #[must_use]
    pub fn with_database(
        mut self,
        url: impl Into<String>,
        driver: impl Into<String>,
        login: impl Into<String>,
    ) -> Self {
        self.database_url = Some(url.into());
        self.database_driver = Some(driver.into());
        self.database_login = Some(login.into());
        self
    }

    /// Sets the plaintext database password.
    #[must_use]
    pub fn with_database_password(mut self, password: impl Into<String>) -> Self {
        self.database_password = Some(password.into());
        self
    }

    /// Sets the Maven plugin version.
    #[must_use]
    pub fn with_mojo_version(mut self, version: impl Into<String>) -> Self {
        self.mojo_version = Some(version.into());
        self
    }

    /// Sets the free-form additional analysis properties.
    #[must_use]
    pub fn with_additional_properties(mut self, properties: impl Into<String>) -> Self {
        self.additional_properties = Some(properties.into());
        self
    }

    /// Sets the trigger policy.
    #[must_use]
    pub fn with_triggers(mut self, triggers: TriggersConfig) -> Self {
        self.triggers = Some(triggers);
        self
    }
}

/// Parameter object for reconstructing a persisted installation.
///
/// Unlike [`InstallationSettings`], the password is already scrambled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedInstallationData {
    /// Persisted installation name.
    pub name: Option<String>,
    /// Persisted disabled flag.
    pub disabled: bool,
    /// Persisted server URL.
    pub server_url: Option<String>,
    /// Persisted public server URL.
    pub server_public_url: Option<String>,
    /// Persisted Maven plugin version.
    pub mojo_version: Option<String>,
    /// Persisted database URL.
    pub database_url: Option<String>,
    /// Persisted database driver.
    pub database_driver: Option<String>,
    /// Persisted database login.
    pub database_login: Option<String>,
    /// Persisted database password in scrambled form.
    pub scrambled_database_password: Option<String>,
    /// Persisted additional properties.
    pub additional_properties: Option<String>,
    /// Persisted trigger policy.
    pub triggers: Option<TriggersConfig>,
}

impl SonarInstallation {
    /// Creates an installation from its full set of settings.
    ///
    /// Every field is stored as given except the password, which goes
    /// through [`Self::set_database_password`].
    #[must_use]
    pub fn new(settings: InstallationSettings) -> Self {
        let InstallationSettings {
            name,
            disabled,
            server_url,
            server_public_url,
            database_url,
            database_driver,
            database_login,
            database_password,
            mojo_version,
            additional_properties,
            triggers,
        } = settings;

        let mut installation = Self {
            name,
            disabled,
            server_url,
            server_public_url,
            mojo_version,
            database_url,
            database_driver,
            database_login,
            database_password: None,
            additional_properties,
            triggers,
        };
        installation.set_database_password(database_password.as_deref());
        installation
    }

    /// Creates an installation with only a name; every other field is
    /// left unset.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(InstallationSettings::named(name))
    }

    /// Reconstructs an installation from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationDomainError::CorruptScrambledPassword`] when the
    /// stored password is not in valid scrambled form.
    pub fn from_persisted(data: PersistedInstallationData) -> Result<Self, InstallationDomainError> {
        let database_password = data
            .scrambled_database_password
            .map(ScrambledPassword::from_scrambled)
            .transpose()?;

        Ok(Self {
            name: data.name,
            disabled: data.disabled,
            server_url: data.server_url,
            server_public_url: data.server_public_url,
            mojo_version: data.mojo_version,
            database_url: data.database_url,
            database_driver: data.database_driver,
            database_login: data.database_login,
            database_password,
            additional_properties: data.additional_properties,
            triggers: data.triggers,
        })
    }

    /// Returns the installation name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns whether build steps should skip this installation.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the configured server URL.
    #[must_use]
    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref()
    }

    /// Returns the publicly reachable server URL.
    #[must_use]
    pub fn server_public_url(&self) -> Option<&str> {
        self.server_public_url.as_deref()
    }

    /// Replaces the publicly reachable server URL.
    pub fn set_server_public_url(&mut self, url: Option<String>) {
        self.server_public_url = url;
    }

    /// Returns the Maven plugin version to run analysis with.
    #[must_use]
    pub fn mojo_version(&self) -> Option<&str> {
        self.mojo_version.as_deref()
    }

    /// Replaces the Maven plugin version.
    pub fn set_mojo_version(&mut self, version: Option<String>) {
        self.mojo_version = version;
    }

    /// Returns the database URL.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Returns the database driver.
    #[must_use]
    pub fn database_driver(&self) -> Option<&str> {
        self.database_driver.as_deref()
    }

    /// Returns the database login.
    #[must_use]
    pub fn database_login(&self) -> Option<&str> {
        self.database_login.as_deref()
    }

    /// Returns the plaintext database password.
    #[must_use]
    pub fn database_password(&self) -> Option<String> {
        self.database_password
            .as_ref()
            .map(ScrambledPassword::descramble)
    }

    /// Stores a new database password.
    ///
    /// Surrounding whitespace is trimmed and an empty result clears the
    /// password. Anything left is scrambled before it is stored.
    pub fn set_database_password(&mut self, password: Option<&str>) {
        self.database_password = password
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ScrambledPassword::scramble);
    }

    /// Returns the password in its scrambled storage form.
    ///
    /// Only meant for migration and export; use
    /// [`Self::database_password`] everywhere else.
    #[must_use]
    pub fn scrambled_database_password(&self) -> Option<&str> {
        self.database_password
            .as_ref()
            .map(ScrambledPassword::as_str)
    }

    /// Returns the additional analysis properties.
    #[must_use]
    pub fn additional_properties(&self) -> Option<&str> {
        self.additional_properties.as_deref()
    }

    /// Returns the trigger policy, storing the empty policy on first use.
    pub fn triggers(&mut self) -> &TriggersConfig {
        self.triggers.get_or_insert_with(TriggersConfig::default)
    }

    /// Returns the base link to the server, without a trailing `/`.
    ///
    /// Prefers the public URL over the server URL and falls back to
    /// [`super::DEFAULT_SONAR_URL`] when neither is set.
    #[must_use]
    pub fn server_link(&self) -> String {
        link::effective_base(self.server_public_url(), self.server_url())
    }

    /// Returns the link to a project dashboard.
    ///
    /// The branch is appended as a third key segment when non-empty.
    #[must_use]
    pub fn project_link(&self, group_id: &str, artifact_id: &str, branch: Option<&str>) -> String {
        link::project_link(&self.server_link(), group_id, artifact_id, branch)
    }

    /// Returns the link to a component listing.
    #[must_use]
    pub fn component_link(&self, group_id: &str, artifact_id: &str) -> String {
        link::component_link(&self.server_link(), group_id, artifact_id)
    }
}
