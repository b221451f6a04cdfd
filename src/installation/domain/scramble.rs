//! Reversible password scrambling for stored installation credentials.
//!
//! Scrambling keeps passwords out of configuration files in plain text. It
//! is an encoding, not encryption: anyone holding the scrambled form can
//! recover the password. Do not treat it as a security control.

use super::InstallationDomainError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Password in its scrambled storage form.
///
/// The storage form is standard Base64 of the UTF-8 bytes, which matches
/// the format the host runtime has always written to disk.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrambledPassword(String);

impl ScrambledPassword {
    /// Scrambles a plaintext password.
    #[must_use]
    pub fn scramble(plaintext: &str) -> Self {
        Self(STANDARD.encode(plaintext.as_bytes()))
    }

    /// Wraps a value that is already in scrambled form.
    ///
    /// # Errors
    ///
    /// Returns [`InstallationDomainError::CorruptScrambledPassword`] when the
    /// value is not valid Base64 or does not decode to UTF-8.
    pub fn from_scrambled(value: impl Into<String>) -> Result<Self, InstallationDomainError> {
        let raw = value.into();
        let bytes = STANDARD
            .decode(raw.as_bytes())
            .map_err(|err| InstallationDomainError::CorruptScrambledPassword(err.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|err| InstallationDomainError::CorruptScrambledPassword(err.to_string()))?;
        Ok(Self(raw))
    }

    /// Recovers the plaintext password.
    #[must_use]
    pub fn descramble(&self) -> String {
        // Construction guarantees valid Base64 over UTF-8 bytes.
        STANDARD
            .decode(self.0.as_bytes())
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Returns the scrambled storage form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ScrambledPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ScrambledPassword {
    type Error = InstallationDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_scrambled(value)
    }
}

impl From<ScrambledPassword> for String {
    fn from(value: ScrambledPassword) -> Self {
        value.0
    }
}

// Keeps the storage form out of logs and panic messages.
impl fmt::Debug for ScrambledPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrambledPassword(..)")
    }
}
