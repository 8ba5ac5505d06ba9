use thiserror::Error;

/// Errors that can occur when authenticating a call.
///
/// Extraction and signature checks never fail on their own; these errors come
/// only from the convenience layer ([`Verifier`](crate::Verifier),
/// [`AccessGate`](crate::AccessGate), [`SigningKey::from_env`](crate::SigningKey::from_env)).
#[derive(Debug, Error)]
pub enum Error {
    /// The call was rejected
    #[error("Access violation: {0}")]
    Violation(#[from] Violation),

    /// No signing key is configured
    #[error("signing key variable '{var}' is not set")]
    SigningKeyUnset {
        /// The environment variable that was consulted
        var: String,
    },
}

/// A rejected call with details about what failed.
///
/// A violation is an authorization outcome, not a transient fault: callers
/// should refuse the call and never retry it.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    /// The carried signature does not match the metadata
    #[error("Invalid signature")]
    InvalidSignature,
    /// The caller lacks a required role
    #[error("Missing role '{role}'")]
    MissingRole {
        /// The role that was required
        role: String,
    },
    /// The caller lacks a required permission
    #[error("Missing permission '{permission}'")]
    MissingPermission {
        /// The permission that was required
        permission: String,
    },
}
