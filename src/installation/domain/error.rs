//! Error types for installation domain reconstruction.

use thiserror::Error;

/// Errors returned while constructing installation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InstallationDomainError {
    /// A persisted password is not in valid scrambled form.
    #[error("scrambled database password is corrupt: {0}")]
    CorruptScrambledPassword(String),
}
