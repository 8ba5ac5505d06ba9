use std::fmt;

use crate::error::Error;

/// Environment variable [`SigningKey::from_default_env`] reads.
pub const DEFAULT_SIGNING_KEY_VAR: &str = "PORTCULLIS_SIGNING_KEY";

/// The shared secret signers and verifiers key their MACs with.
///
/// `SigningKey` keeps the key material out of logs and error output. The
/// bytes are reachable only through [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - An empty key is accepted; HMAC with an empty key is well defined
///
/// # Examples
///
/// ```
/// use portcullis::SigningKey;
///
/// let key = SigningKey::new("topsecret");
///
/// println!("{:?}", key); // Prints: [REDACTED]
/// assert_eq!(key.expose_secret(), b"topsecret");
/// ```
// BREAKING CHANGE WARNING: Do NOT add Clone, Copy, or Default derives.
// Key material must not be duplicated implicitly.
pub struct SigningKey {
    // BREAKING CHANGE WARNING: This field MUST remain private (CWE-532).
    inner: Vec<u8>,
}

impl SigningKey {
    /// Wraps raw key material.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { inner: key.into() }
    }

    /// Reads the key from the environment variable `var`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SigningKeyUnset`] if the variable is missing or not
    /// valid unicode. An empty value is accepted.
    pub fn from_env(var: &str) -> Result<Self, Error> {
        let value = std::env::var(var).map_err(|_| Error::SigningKeyUnset {
            var: var.to_string(),
        })?;
        tracing::debug!(var, "loaded signing key from environment");
        Ok(Self::new(value))
    }

    /// Reads the key from [`DEFAULT_SIGNING_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_default_env() -> Result<Self, Error> {
        Self::from_env(DEFAULT_SIGNING_KEY_VAR)
    }

    /// Explicitly exposes the key bytes.
    ///
    /// # Security Warning
    ///
    /// The name is deliberately loud. Never log or display the returned bytes.
    pub fn expose_secret(&self) -> &[u8] {
        &self.inner
    }
}

impl From<&str> for SigningKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SigningKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(key: Vec<u8>) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for SigningKey {
    /// BREAKING CHANGE WARNING: This MUST unconditionally return "[REDACTED]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SigningKey {
    /// BREAKING CHANGE WARNING: This MUST unconditionally return "[REDACTED]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
