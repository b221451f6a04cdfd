//! Trigger policy value object.

use serde::{Deserialize, Serialize};

/// Rules deciding when analysis runs for builds using an installation.
///
/// The installation only stores the policy; build steps interpret it. The
/// default value is the empty policy: no causes are skipped and no
/// environment variable gates the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggersConfig {
    skip_scm_cause: bool,
    skip_upstream_cause: bool,
    env_var: Option<String>,
}

impl TriggersConfig {
    /// Creates a policy with both skip flags set explicitly.
    #[must_use]
    pub const fn new(skip_scm_cause: bool, skip_upstream_cause: bool) -> Self {
        Self {
            skip_scm_cause,
            skip_upstream_cause,
            env_var: None,
        }
    }

    /// Sets the environment variable that must be present to run analysis.
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = Some(name.into());
        self
    }

    /// Returns whether builds started by an SCM change skip analysis.
    #[must_use]
    pub const fn skip_scm_cause(&self) -> bool {
        self.skip_scm_cause
    }

    /// Returns whether builds started by an upstream build skip analysis.
    #[must_use]
    pub const fn skip_upstream_cause(&self) -> bool {
        self.skip_upstream_cause
    }

    /// Returns the gating environment variable, if any.
    #[must_use]
    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }
}
