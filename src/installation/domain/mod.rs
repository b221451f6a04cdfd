//! Domain model for Sonar installations.
//!
//! An installation is a named connection profile for one Sonar server:
//! server URLs, database credentials, the Maven plugin version and the
//! trigger policy. The domain also owns link building and password
//! scrambling. Infrastructure concerns remain outside this boundary.

mod error;
mod installation;
mod link;
mod scramble;
mod triggers;

pub use error::InstallationDomainError;
pub use installation::{InstallationSettings, PersistedInstallationData, SonarInstallation};
pub use link::DEFAULT_SONAR_URL;
pub use scramble::ScrambledPassword;
pub use triggers::TriggersConfig;
